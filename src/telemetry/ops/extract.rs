use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Extract;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Validate, Delay, Fetch, Normalize, Fallback, Store, Export }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Validate => "validate",
        Phase::Delay => "delay",
        Phase::Fetch => "fetch",
        Phase::Normalize => "normalize",
        Phase::Fallback => "fallback",
        Phase::Store => "store",
        Phase::Export => "export",
    }}
    fn span(&self) -> Span { match self {
        Phase::Validate => info_span!("validate"),
        Phase::Delay => info_span!("delay"),
        Phase::Fetch => info_span!("fetch"),
        Phase::Normalize => info_span!("normalize"),
        Phase::Fallback => info_span!("fallback"),
        Phase::Store => info_span!("store"),
        Phase::Export => info_span!("export"),
    }}
}

impl OpMarker for Extract {
    const NAME: &'static str = "extract";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("extract") }
}
