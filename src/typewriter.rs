use crate::core::{TypewriterConfig, TypewriterState};
use crate::dom;
use crate::frame;

pub fn start(document: &web_sys::Document, config: &TypewriterConfig) -> anyhow::Result<()> {
    let target = dom::query(document, ".typewriter-text")?;
    let mut state = TypewriterState::new(config)?;
    frame::start_repeating(config.start_delay, move || {
        let step = state.advance();
        target.set_text_content(Some(&step.text));
        step.next_delay
    });
    Ok(())
}
