//! 预置排队网络
//!
//! 单队列、串联与三队列混合网络，可直接交给 `Simulation` 运行。

pub mod multi;
pub mod single;
pub mod tandem;

use clap::ValueEnum;
use std::fmt;

use crate::sim::{DEFAULT_MAX_RANDOM, NetworkConfig};

/// 预置网络共用的运行选项
#[derive(Debug, Clone)]
pub struct PresetOpts {
    pub seed: Option<u64>,
    pub max_random: u64,
}

impl Default for PresetOpts {
    fn default() -> Self {
        Self {
            seed: Some(42),
            max_random: DEFAULT_MAX_RANDOM,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Single,
    Tandem,
    Multi,
}

impl Preset {
    pub fn build(self, opts: &PresetOpts) -> NetworkConfig {
        match self {
            Preset::Single => single::build_single(opts),
            Preset::Tandem => tandem::build_tandem(opts),
            Preset::Multi => multi::build_multi(opts),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preset::Single => "single",
            Preset::Tandem => "tandem",
            Preset::Multi => "multi",
        };
        f.write_str(name)
    }
}
