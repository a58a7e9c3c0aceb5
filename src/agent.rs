//! The common interface of every move-choosing agent, and construction by tag

use crate::{
    error::SearchError, human::HumanAgent, lookahead::*, minimax::MinimaxAgent,
    prune::MinimaxPruneAgent, random::RandomAgent, state::*,
};

use std::fmt;
use std::str::FromStr;

/// The outcome of a top-level search
#[derive(Clone, Debug)]
pub struct SearchResult<S: GameState> {
    pub best_move: S::Move,
    /// The position reached by playing `best_move`
    pub state: S,
    /// The backed-up value of `state`
    pub value: f64,
}

/// Anything that can pick a move in a position
pub trait Agent<S: GameState> {
    /// Chooses a move, returning it together with the position it leads to.
    /// `state` is left untouched.
    fn get_move(&mut self, state: &S) -> Result<(S::Move, S), SearchError>;

    /// Display name for logs and the driver
    fn name(&self) -> &str;
}

/// Values every successor of `state` and keeps the best one for the player to move
///
/// The maximizer keeps the highest value and the minimizer the lowest. Comparisons
/// are strict, so the earliest successor wins ties.
pub fn select_best<S, F>(state: &S, mut value_of: F) -> Result<SearchResult<S>, SearchError>
where
    S: GameState,
    F: FnMut(&S) -> Result<f64, SearchError>,
{
    let next_player = state.next_player();
    let mut best: Option<SearchResult<S>> = None;

    for (next_move, child) in state.successors() {
        let value = value_of(&child)?;
        let improves = match &best {
            None => true,
            Some(current) => match next_player {
                Player::Maximizer => value > current.value,
                Player::Minimizer => value < current.value,
            },
        };
        if improves {
            best = Some(SearchResult {
                best_move: next_move,
                state: child,
                value,
            });
        }
    }

    best.ok_or(SearchError::NoSuccessors)
}

/// The kinds of agent that can be requested by tag
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum AgentKind {
    Random,
    Human,
    /// Exact minimax, tag `mini`
    Minimax,
    /// Alpha-beta pruned minimax, tag `prune`
    Prune,
    /// Depth-limited minimax, tag `look<N>`
    Lookahead(usize),
    /// Constant-valued placeholder, tag `alt<N>`
    Alt(usize),
}

impl FromStr for AgentKind {
    type Err = SearchError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let bad_tag = || SearchError::InvalidConfiguration(tag.to_string());
        let parse_depth = |depth: &str| depth.parse::<usize>().map_err(|_| bad_tag());

        match tag {
            "random" => Ok(AgentKind::Random),
            "human" => Ok(AgentKind::Human),
            "mini" => Ok(AgentKind::Minimax),
            "prune" => Ok(AgentKind::Prune),
            _ => {
                if let Some(depth) = tag.strip_prefix("look") {
                    Ok(AgentKind::Lookahead(parse_depth(depth)?))
                } else if let Some(depth) = tag.strip_prefix("alt") {
                    Ok(AgentKind::Alt(parse_depth(depth)?))
                } else {
                    Err(bad_tag())
                }
            }
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentKind::Random => write!(f, "random"),
            AgentKind::Human => write!(f, "human"),
            AgentKind::Minimax => write!(f, "mini"),
            AgentKind::Prune => write!(f, "prune"),
            AgentKind::Lookahead(depth) => write!(f, "look{}", depth),
            AgentKind::Alt(depth) => write!(f, "alt{}", depth),
        }
    }
}

impl AgentKind {
    /// Builds an agent of this kind, seeding the random agent with `seed` if given
    pub fn build<S: GameState + 'static>(self, seed: Option<u64>) -> Box<dyn Agent<S>> {
        match self {
            AgentKind::Random => Box::new(match seed {
                Some(seed) => RandomAgent::with_seed(seed),
                None => RandomAgent::new(),
            }),
            AgentKind::Human => Box::new(HumanAgent::new()),
            AgentKind::Minimax => Box::new(MinimaxAgent::new()),
            AgentKind::Prune => Box::new(MinimaxPruneAgent::new()),
            AgentKind::Lookahead(depth) => Box::new(MinimaxLookaheadAgent::new(Some(depth))),
            AgentKind::Alt(depth) => Box::new(AltMinimaxLookaheadAgent::new(Some(depth))),
        }
    }
}

/// Creates the agent named by `tag`
pub fn get_agent<S: GameState + 'static>(tag: &str) -> Result<Box<dyn Agent<S>>, SearchError> {
    get_agent_with_seed(tag, None)
}

/// Creates the agent named by `tag`, seeding a random agent for reproducible play
pub fn get_agent_with_seed<S: GameState + 'static>(
    tag: &str,
    seed: Option<u64>,
) -> Result<Box<dyn Agent<S>>, SearchError> {
    Ok(tag.parse::<AgentKind>()?.build(seed))
}
