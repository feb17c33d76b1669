pub mod llm;
pub mod storage;
