//! Optimization facade: strategy selection and solve options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::eft::EarliestFinishOptimizer;
use crate::error::{ConfigError, ParseStrategyError, ValidationError};
use crate::haversine::DEFAULT_SPEED_KMH;
use crate::model::DeliveryRequest;
use crate::route::RouteResult;
use crate::traits::RouteStrategy;
use crate::tsp::ExhaustiveOptimizer;

const SPEED_ENV: &str = "DELIVERY_SPEED_KMH";
const STRATEGY_ENV: &str = "DELIVERY_STRATEGY";

/// Which ordering strategy to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Greedy earliest-finish-time heuristic.
    #[default]
    Eft,
    /// Exhaustive search over all order sequences.
    Tsp,
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "eft" => Ok(Strategy::Eft),
            "tsp" => Ok(Strategy::Tsp),
            _ => Err(ParseStrategyError(value.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Eft => f.write_str("eft"),
            Strategy::Tsp => f.write_str("tsp"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// Constant courier speed in km/h.
    pub speed_kmh: f64,
    pub strategy: Strategy,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            strategy: Strategy::default(),
        }
    }
}

impl SolveOptions {
    /// Defaults overlaid with `DELIVERY_SPEED_KMH` and `DELIVERY_STRATEGY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`SolveOptions::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(raw) = lookup(SPEED_ENV) {
            let speed = raw.trim().parse::<f64>().map_err(|_| ConfigError::UnparseableSpeed {
                var: SPEED_ENV,
                value: raw.clone(),
            })?;
            options = options.with_speed(speed)?;
        }

        if let Some(raw) = lookup(STRATEGY_ENV) {
            options.strategy = raw
                .parse()
                .map_err(|source| ConfigError::Strategy { var: STRATEGY_ENV, source })?;
        }

        Ok(options)
    }

    pub fn with_speed(mut self, speed_kmh: f64) -> Result<Self, ConfigError> {
        if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
            return Err(ConfigError::InvalidSpeed(speed_kmh));
        }
        self.speed_kmh = speed_kmh;
        Ok(self)
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Binds one strategy to incoming requests.
///
/// Holds no per-request state, so one instance can serve many requests,
/// including from several threads at once.
pub struct DeliveryOptimizer {
    strategy: Box<dyn RouteStrategy + Send + Sync>,
}

impl DeliveryOptimizer {
    pub fn new<S>(strategy: S) -> Self
    where
        S: RouteStrategy + Send + Sync + 'static,
    {
        Self {
            strategy: Box::new(strategy),
        }
    }

    pub fn from_options(options: &SolveOptions) -> Self {
        match options.strategy {
            Strategy::Eft => Self::new(EarliestFinishOptimizer::new(options.speed_kmh)),
            Strategy::Tsp => Self::new(ExhaustiveOptimizer::new(options.speed_kmh)),
        }
    }

    /// Run the bound strategy. Assumes `request` already passed validation.
    pub fn optimize(&self, request: &DeliveryRequest) -> RouteResult {
        self.strategy.optimize(request)
    }

    /// Validate `request`, then run the bound strategy.
    pub fn optimize_validated(&self, request: &DeliveryRequest) -> Result<RouteResult, ValidationError> {
        request.validate()?;
        Ok(self.optimize(request))
    }
}

impl Default for DeliveryOptimizer {
    fn default() -> Self {
        Self::from_options(&SolveOptions::default())
    }
}

impl fmt::Debug for DeliveryOptimizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryOptimizer").finish_non_exhaustive()
    }
}

/// Solve `request` with the strategy and speed from `options`.
pub fn solve(request: &DeliveryRequest, options: &SolveOptions) -> RouteResult {
    DeliveryOptimizer::from_options(options).optimize(request)
}

/// Greedy earliest-finish route at the default courier speed.
pub fn optimize_greedy(request: &DeliveryRequest) -> RouteResult {
    EarliestFinishOptimizer::new(DEFAULT_SPEED_KMH).optimize(request)
}

/// Exact minimal-time route at the default courier speed.
pub fn optimize_exact(request: &DeliveryRequest) -> RouteResult {
    ExhaustiveOptimizer::new(DEFAULT_SPEED_KMH).optimize(request)
}
