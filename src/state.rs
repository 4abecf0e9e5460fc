use std::sync::Arc;

use super::{config::Config, ledger::Ledger};

pub struct State {
    pub config: Config,
    pub ledger: Ledger,
}

impl State {
    pub fn new(config: Config) -> Arc<Self> {
        Arc::new(Self {
            config,
            ledger: Ledger::new(),
        })
    }
}
