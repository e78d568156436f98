use zerosum::errors::EngineError;
use zerosum::eval::Evaluation;
use zerosum::game::Game;
use zerosum::Objective;

use crate::minimax::transposition_table::{TTEntry, TTFlag, TranspositionTable};
use crate::minimax::types::MinimaxConfig;
use crate::{GameTreeSearch, Resolution, SearchCounter, SearchResult};

/// Depth budget that no finite acyclic game outlasts. Also the hard bound
/// on recursion depth.
pub const FULL_DEPTH: u8 = u8::MAX;

struct SearchContext<'a, G: Game> {
    config: MinimaxConfig,
    counter: SearchCounter,
    table: Option<&'a mut TranspositionTable<G>>,
}

/// A computed value plus whether it is free of depth-cutoff influence.
type NodeValue<E> = (E, bool);

#[inline]
fn evaluate_leaf<G: Game>(game: &G, state: &G::State, ctx: &mut SearchContext<'_, G>) -> Result<G::Eval, EngineError> {
    ctx.counter.evals += 1;
    game.evaluate(state, game.to_move(state))
}

fn search_node<G: Game>(
    game: &G,
    state: &G::State,
    remaining: u8,
    alpha: G::Eval,
    beta: G::Eval,
    ctx: &mut SearchContext<'_, G>,
) -> Result<NodeValue<G::Eval>, EngineError> {
    if game.is_terminal(state) {
        return Ok((evaluate_leaf(game, state, ctx)?, true));
    }
    if remaining == 0 {
        // heuristic estimate; the false tag keeps it out of any exact claim
        return Ok((evaluate_leaf(game, state, ctx)?, false));
    }
    if let Some(table) = ctx.table.as_deref() {
        if let Some((value, proven)) = table.probe(state, remaining, alpha, beta) {
            ctx.counter.tt_hits += 1;
            return Ok((value, proven));
        }
    }
    expand(game, state, remaining, alpha, beta, ctx, None)
}

/// Expand one interior node: enumerate actions in their natural order,
/// recurse, and combine child values per the mover's objective. Fail-hard:
/// the returned value is clamped to the `(alpha, beta)` window.
///
/// `best_action` is populated at the root only; the first action achieving
/// the final value wins ties.
fn expand<G: Game>(
    game: &G,
    state: &G::State,
    remaining: u8,
    alpha: G::Eval,
    beta: G::Eval,
    ctx: &mut SearchContext<'_, G>,
    mut best_action: Option<&mut Option<G::Action>>,
) -> Result<NodeValue<G::Eval>, EngineError> {
    let actions = game.legal_actions(state)?;
    if actions.is_empty() {
        return Err(EngineError::InvalidState(format!(
            "non-terminal state with no legal actions: {state:?}"
        )));
    }
    let prune = ctx.config.alpha_beta;
    let mut proven = true;

    let (value, flag) = match game.objective(game.to_move(state)) {
        Objective::Maximize => {
            let mut best = alpha;
            let mut flag = TTFlag::Upper;
            for action in actions {
                let child = game.apply(state, action)?;
                ctx.counter.nodes_expanded += 1;
                let window = if prune { (best, beta) } else { (G::Eval::MIN, G::Eval::MAX) };
                let (v, p) = search_node(game, &child, remaining - 1, window.0, window.1, ctx)?;
                proven &= p;
                if v > best {
                    best = v;
                    flag = TTFlag::Exact;
                    if let Some(chosen) = best_action.as_deref_mut() {
                        *chosen = Some(action);
                    }
                }
                if prune && best >= beta {
                    flag = TTFlag::Lower;
                    best = beta;
                    break;
                }
            }
            (best, flag)
        }
        Objective::Minimize => {
            let mut best = beta;
            let mut flag = TTFlag::Lower;
            for action in actions {
                let child = game.apply(state, action)?;
                ctx.counter.nodes_expanded += 1;
                let window = if prune { (alpha, best) } else { (G::Eval::MIN, G::Eval::MAX) };
                let (v, p) = search_node(game, &child, remaining - 1, window.0, window.1, ctx)?;
                proven &= p;
                if v < best {
                    best = v;
                    flag = TTFlag::Exact;
                    if let Some(chosen) = best_action.as_deref_mut() {
                        *chosen = Some(action);
                    }
                }
                if prune && best <= alpha {
                    flag = TTFlag::Upper;
                    best = alpha;
                    break;
                }
            }
            (best, flag)
        }
    };

    if let Some(table) = ctx.table.as_deref_mut() {
        table.store(TTEntry::new(state.clone(), flag, remaining, value, proven));
    }
    Ok((value, proven))
}

/// One depth-limited search from the root.
///
/// The root never consults the table (a hit would return a value without
/// an action) and always sees the full window, so the chosen action is the
/// first one achieving the root value.
fn search_root<G: Game>(
    game: &G,
    state: &G::State,
    depth: u8,
    ctx: &mut SearchContext<'_, G>,
) -> Result<SearchResult<G>, EngineError> {
    let mut best_action = None;
    let (eval, proven) = if game.is_terminal(state) {
        (evaluate_leaf(game, state, ctx)?, true)
    } else if depth == 0 {
        (evaluate_leaf(game, state, ctx)?, false)
    } else {
        expand(
            game,
            state,
            depth,
            G::Eval::MIN,
            G::Eval::MAX,
            ctx,
            Some(&mut best_action),
        )?
    };
    Ok(SearchResult {
        best_action,
        eval,
        resolution: if proven { Resolution::Exact } else { Resolution::Cutoff },
        counter: ctx.counter,
    })
}

/// Minimax/alpha-beta engine owning its configuration and table.
///
/// The table persists for the lifetime of the engine: across the
/// iterations of one deepening run and across successive searches of one
/// game.
pub struct MinimaxSearch<G: Game> {
    pub config: MinimaxConfig,
    table: Option<TranspositionTable<G>>,
}

impl<G: Game> MinimaxSearch<G> {
    pub fn new(config: MinimaxConfig) -> Self {
        let table = config
            .use_transposition_table
            .then(|| TranspositionTable::new(config.table_capacity));
        Self { config, table }
    }

    pub fn table(&self) -> Option<&TranspositionTable<G>> {
        self.table.as_ref()
    }

    pub fn clear_table(&mut self) {
        if let Some(table) = &mut self.table {
            table.clear();
        }
    }

    fn run_single(&mut self, game: &G, state: &G::State, depth: u8) -> Result<SearchResult<G>, EngineError> {
        let mut ctx = SearchContext {
            config: self.config,
            counter: SearchCounter::default(),
            table: self.table.as_mut(),
        };
        let mut result = search_root(game, state, depth, &mut ctx)?;
        result.counter.last_depth = depth;
        Ok(result)
    }

    /// Widen the depth limit from zero until the result is exact.
    ///
    /// Node counts accumulate across iterations; the value and action come
    /// from the final iteration. Terminates for finite acyclic games; a
    /// game whose positions can repeat may deepen up to `max_depth`
    /// without ever resolving, in which case the cutoff is reported as-is.
    fn run_deepening(&mut self, game: &G, state: &G::State, max_depth: u8) -> Result<SearchResult<G>, EngineError> {
        let mut total = SearchCounter::default();
        let mut depth = 0;
        loop {
            let mut result = self.run_single(game, state, depth)?;
            total.add_in_place(&result.counter);
            total.last_depth = depth;
            if self.config.debug {
                println!(
                    " - Depth {depth:3}: eval={:?}, action={:?}, {:?}, nodes={}",
                    result.eval, result.best_action, result.resolution, result.counter.nodes_expanded
                );
            }
            if result.resolution.is_exact() || depth >= max_depth {
                result.counter = total;
                return Ok(result);
            }
            depth += 1;
        }
    }

    /// Best action for `state`, its value, and diagnostic counts.
    ///
    /// `depth_limit` overrides the configured cap for this call. With
    /// iterative deepening the search widens until exact (or until the
    /// cap); otherwise it is a single run at the cap.
    pub fn find_best_action(
        &mut self,
        game: &G,
        state: &G::State,
        depth_limit: Option<u8>,
    ) -> Result<SearchResult<G>, EngineError> {
        let limit = depth_limit.or(self.config.depth_limit);
        if self.config.iterative_deepening {
            self.run_deepening(game, state, limit.unwrap_or(FULL_DEPTH))
        } else {
            self.run_single(game, state, limit.unwrap_or(FULL_DEPTH))
        }
    }
}

impl<G: Game> GameTreeSearch<G> for MinimaxSearch<G> {
    fn search(&mut self, game: &G, state: &G::State) -> Result<SearchResult<G>, EngineError> {
        self.find_best_action(game, state, None)
    }
}
