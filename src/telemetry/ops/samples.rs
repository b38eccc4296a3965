use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Samples;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Select, List }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self { Phase::Select => "select", Phase::List => "list" } }
    fn span(&self) -> Span { match self { Phase::Select => info_span!("select"), Phase::List => info_span!("list") } }
}

impl OpMarker for Samples {
    const NAME: &'static str = "samples";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("samples") }
}
