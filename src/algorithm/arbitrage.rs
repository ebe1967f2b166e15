use crate::algorithm::bellman_ford::{find_negative_cycle, BellmanFord, BellmanFordResult};
use crate::graph::DirectedGraph;
use crate::{Error, Result};

/// Currencies and the exchange rates between them.
///
/// A rate `r` from `a` to `b` becomes an edge of weight `-ln(r)`. A cycle whose
/// rates multiply to more than 1 then has negative total weight, so arbitrage
/// shows up as a negative cycle.
#[derive(Debug, Clone, Default)]
pub struct ExchangeNetwork {
    currencies: Vec<String>,
    rates: Vec<(usize, usize, f64)>,
}

/// A profitable cycle of trades
#[derive(Debug, Clone, PartialEq)]
pub struct Arbitrage {
    /// Currencies in trading order; the last trades back into the first
    pub cycle: Vec<usize>,
    /// Product of the rates along the cycle
    pub multiplier: f64,
}

impl ExchangeNetwork {
    pub fn new<I, S>(currencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExchangeNetwork {
            currencies: currencies.into_iter().map(Into::into).collect(),
            rates: Vec::new(),
        }
    }

    pub fn currency_count(&self) -> usize {
        self.currencies.len()
    }

    pub fn name(&self, currency: usize) -> Option<&str> {
        self.currencies.get(currency).map(String::as_str)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.currencies.iter().position(|c| c == name)
    }

    /// Records that one unit of `from` buys `rate` units of `to`
    pub fn add_rate(&mut self, from: usize, to: usize, rate: f64) -> Result<()> {
        if from >= self.currencies.len() || to >= self.currencies.len() {
            return Err(Error::InvalidEdge(from, to));
        }
        if !rate.is_finite() || rate <= 0.0 {
            return Err(Error::InvalidWeight);
        }
        self.rates.push((from, to, rate));
        Ok(())
    }

    /// Best quoted rate from `from` to `to`
    pub fn rate(&self, from: usize, to: usize) -> Option<f64> {
        self.rates
            .iter()
            .filter(|(f, t, _)| *f == from && *t == to)
            .map(|(_, _, rate)| *rate)
            .fold(None, |best: Option<f64>, rate| Some(best.map_or(rate, |b| b.max(rate))))
    }

    /// Builds the `-ln(rate)` graph
    pub fn to_graph(&self) -> Result<DirectedGraph<f64>> {
        DirectedGraph::from_edges(
            self.currencies.len(),
            self.rates.iter().map(|&(from, to, rate)| (from, to, -rate.ln())),
        )
    }

    /// Bellman-Ford from `source`; flagged currencies can be multiplied without bound
    pub fn analyze(&self, source: usize) -> Result<BellmanFordResult<f64>> {
        BellmanFord::new().run(&self.to_graph()?, source)
    }

    /// Product of the best rates around `cycle`, closing back to its first currency
    pub fn cycle_multiplier(&self, cycle: &[usize]) -> Option<f64> {
        if cycle.is_empty() {
            return None;
        }
        (0..cycle.len()).try_fold(1.0, |acc, i| {
            let next = cycle[(i + 1) % cycle.len()];
            self.rate(cycle[i], next).map(|rate| acc * rate)
        })
    }

    /// Finds a profitable trading cycle, if one exists
    pub fn find_arbitrage(&self) -> Result<Option<Arbitrage>> {
        let cycle = match find_negative_cycle(&self.to_graph()?)? {
            Some(cycle) => cycle,
            None => return Ok(None),
        };

        Ok(self
            .cycle_multiplier(&cycle)
            .map(|multiplier| Arbitrage { cycle, multiplier }))
    }
}
