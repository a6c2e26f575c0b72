//! Seeded random walks over the storefront action surface.
use gamestore_core::{
    ActionOutcome, Catalog, GameId, Genre, SortKey, StoreAction, StorefrontSession,
};
use rand::Rng;
use rand::seq::SliceRandom;

use super::invariants::{Violation, check_cart, check_cleared, check_ownership, check_view};

/// An id no shipped catalog uses; actions on it must be ignored.
const UNKNOWN_ID: GameId = GameId::MAX;

/// Pick a search query: a title fragment, noise, or the empty string.
pub fn random_query<R: Rng + ?Sized>(rng: &mut R, catalog: &Catalog) -> String {
    match rng.gen_range(0..10) {
        0 => String::new(),
        1 => String::from("zz-no-match"),
        _ => {
            let Some(game) = catalog.games().choose(rng) else {
                return String::new();
            };
            let chars: Vec<char> = game.title.chars().collect();
            let start = rng.gen_range(0..chars.len());
            let end = rng.gen_range(start + 1..=chars.len().min(start + 5));
            let fragment: String = chars[start..end].iter().collect();
            if rng.gen_bool(0.5) {
                fragment.to_uppercase()
            } else {
                fragment
            }
        }
    }
}

fn random_id<R: Rng + ?Sized>(rng: &mut R, session: &StorefrontSession) -> GameId {
    if rng.gen_bool(0.1) {
        return UNKNOWN_ID;
    }
    let in_cart = session.cart().lines();
    if !in_cart.is_empty()
        && rng.gen_bool(0.5)
        && let Some(line) = in_cart.choose(rng)
    {
        return line.id();
    }
    session
        .catalog()
        .games()
        .choose(rng)
        .map_or(UNKNOWN_ID, |game| game.id)
}

/// Draw one action, biased toward ones that change the session.
pub fn random_action<R: Rng + ?Sized>(rng: &mut R, session: &StorefrontSession) -> StoreAction {
    match rng.gen_range(0..100) {
        0..=11 => StoreAction::Search(random_query(rng, session.catalog())),
        12..=29 => StoreAction::ToggleGenre(*Genre::ALL.choose(rng).unwrap_or(&Genre::Action)),
        30..=41 => StoreAction::Sort(*SortKey::ALL.choose(rng).unwrap_or(&SortKey::Popular)),
        42..=47 => StoreAction::ClearFilters,
        48..=69 => StoreAction::AddToCart(random_id(rng, session)),
        70..=79 => StoreAction::RemoveFromCart(random_id(rng, session)),
        80..=93 => StoreAction::SetQuantity(random_id(rng, session), rng.gen_range(-3..=12)),
        94..=96 => StoreAction::OpenCart,
        _ => StoreAction::CloseCart,
    }
}

/// Dispatch `action` and verify every invariant that must hold afterwards.
///
/// # Errors
///
/// Returns the first violated invariant.
pub fn step(session: &mut StorefrontSession, action: StoreAction) -> Result<ActionOutcome, Violation> {
    let before_filter = session.filter().clone();
    let before_cart = session.cart().clone();
    let before_open = session.is_cart_open();
    let sent = action.clone();

    let outcome = session.dispatch(action);

    if outcome == ActionOutcome::Ignored
        && (session.filter() != &before_filter
            || session.cart() != &before_cart
            || session.is_cart_open() != before_open)
    {
        return Err(Violation::IgnoredButChanged {
            action: format!("{sent:?}"),
        });
    }
    check_ownership(
        &sent,
        session.filter() != &before_filter,
        session.cart() != &before_cart,
    )?;
    if sent == StoreAction::ClearFilters {
        check_cleared(&before_filter, session.filter())?;
    }
    check_cart(session.cart())?;
    check_view(session.catalog(), session.filter())?;
    Ok(outcome)
}

/// Summary of one completed walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub applied: usize,
    pub ignored: usize,
}

/// Run `steps` random actions, checking invariants after each one.
///
/// # Errors
///
/// Returns the step index and violation of the first failure.
pub fn walk<R: Rng + ?Sized>(
    rng: &mut R,
    session: &mut StorefrontSession,
    steps: usize,
) -> Result<WalkStats, (usize, Violation)> {
    let mut stats = WalkStats::default();
    for index in 0..steps {
        let action = random_action(rng, session);
        log::trace!("step {index}: {action:?}");
        match step(session, action).map_err(|violation| (index, violation))? {
            ActionOutcome::Applied => stats.applied += 1,
            ActionOutcome::Ignored => stats.ignored += 1,
        }
    }
    Ok(stats)
}
