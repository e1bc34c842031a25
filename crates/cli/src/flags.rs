use bouquet_core::MalformedPolicy;
use clap::ValueEnum;

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum PolicyFlag {
    Skip,
    Abort,
}

impl PolicyFlag {
    pub(crate) const fn as_domain(self) -> MalformedPolicy {
        match self {
            PolicyFlag::Skip => MalformedPolicy::Skip,
            PolicyFlag::Abort => MalformedPolicy::Abort,
        }
    }
}
