//! Resource detail overlay and the body it shares with the resource page.

pub mod detail_overlay;
pub mod resource_detail_body;
