use std::time::Duration;

use dioxus::prelude::*;

/// Drive `dom` until it goes quiet: run spawned tasks and effects, then
/// re-render whatever they dirtied.
pub(crate) async fn settle(dom: &mut VirtualDom) {
    for _ in 0..32 {
        let work = tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work()).await;
        if work.is_err() {
            break;
        }
        dom.render_immediate_to_vec();
    }
}
