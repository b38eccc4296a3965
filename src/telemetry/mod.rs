pub mod config;
pub mod ctx;
pub mod emit;
pub mod ops;

use ctx::LogCtx;

pub fn extract() -> LogCtx<ops::extract::Extract> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
pub fn samples() -> LogCtx<ops::samples::Samples> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
