// Resume tailoring flow.
// Implements: input validation, tier selection, completion call, Markdown rendering.
// All completion traffic goes through the completion module, never direct HTTP here.

pub mod handlers;
pub mod markdown;
pub mod tier;
