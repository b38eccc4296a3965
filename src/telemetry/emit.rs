use anyhow::Result;
use serde::Serialize;

use crate::output::config::OutputConfig;
use crate::output::presenter::Emitter;
use crate::output::types::{Envelope, Meta};

use super::config;

pub fn print_result<T: Serialize>(op: &'static str, result: &T, meta: Option<Meta>) -> Result<()> {
    let env = Envelope::result(op, result, meta)?;
    let cfg = OutputConfig::resolve(config::json_mode());
    Emitter::new(cfg).emit(&env)?;
    Ok(())
}
