use anyhow::Result;
use fray::{
    battle::{
        Battle,
        BattleOptions,
        MonData,
        SideData,
        StandardDamageEngine,
    },
    dex::Dex,
};
use fray_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

use crate::ControlledRandomNumberGenerator;

/// Battle builder object for integration tests.
pub struct TestBattleBuilder {
    options: BattleOptions,
    seed: Option<u64>,
    controlled_rng: bool,
}

impl TestBattleBuilder {
    /// Creates a new [`TestBattleBuilder`].
    pub fn new() -> Self {
        Self {
            options: BattleOptions {
                side_1: SideData {
                    name: "Side 1".to_string(),
                    mons: Vec::new(),
                },
                side_2: SideData {
                    name: "Side 2".to_string(),
                    mons: Vec::new(),
                },
            },
            seed: None,
            controlled_rng: false,
        }
    }

    /// Builds a new [`Battle`] from the battle builder.
    pub fn build(self, dex: Dex) -> Result<Battle> {
        let prng: Box<dyn PseudoRandomNumberGenerator> = if self.controlled_rng {
            Box::new(ControlledRandomNumberGenerator::new(self.seed))
        } else {
            Box::new(RealPseudoRandomNumberGenerator::new(self.seed))
        };
        Battle::new(self.options, dex, prng, Box::new(StandardDamageEngine))
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }

    pub fn with_side_1(mut self, name: &str) -> Self {
        self.options.side_1.name = name.to_string();
        self
    }

    pub fn with_side_2(mut self, name: &str) -> Self {
        self.options.side_2.name = name.to_string();
        self
    }

    pub fn add_mon_to_side_1(mut self, mon: MonData) -> Self {
        self.options.side_1.mons.push(mon);
        self
    }

    pub fn add_mon_to_side_2(mut self, mon: MonData) -> Self {
        self.options.side_2.mons.push(mon);
        self
    }
}
