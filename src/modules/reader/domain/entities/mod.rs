pub mod reader_session;
