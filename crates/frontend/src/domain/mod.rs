pub mod a001_client;
