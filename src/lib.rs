pub mod block;
pub mod build_info;
pub mod cli;
pub mod dispatch;
pub mod error;
pub mod functional;
pub mod init;
pub mod lbm;
pub mod processor;
pub mod statistics;
pub mod surface;
pub mod util;
