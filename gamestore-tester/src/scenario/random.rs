use anyhow::{Result, anyhow};
use gamestore_core::StorefrontSession;
use rand_chacha::ChaCha8Rng;
use std::rc::Rc;

use super::ScenarioCtx;
use crate::logic::walker::walk;

const STEPS: usize = 250;

/// Long random action sequences never break a cart or filter invariant.
pub fn random_actions(ctx: &ScenarioCtx, rng: &mut ChaCha8Rng) -> Result<()> {
    let mut session = StorefrontSession::new(Rc::clone(&ctx.catalog));
    let stats = walk(rng, &mut session, STEPS)
        .map_err(|(index, violation)| anyhow!("seed {} step {index}: {violation}", ctx.seed))?;
    if ctx.verbose {
        println!(
            "     ↳ {} applied, {} ignored, {} cart lines",
            stats.applied,
            stats.ignored,
            session.cart().len()
        );
    }
    Ok(())
}
