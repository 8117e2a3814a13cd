use yew::prelude::*;

use crate::content::Stat;
use crate::count_up::{count_up_value, CountUpConfig};
use crate::frame::FrameLoop;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub stat: &'static Stat,
    pub index: usize,
    /// Counting starts the first time this turns true.
    pub active: bool,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let shown = use_state_eq(|| 0u32);

    {
        let shown = shown.clone();
        let target = props.stat.value;
        let config = CountUpConfig::staggered(props.index);
        use_effect_with_deps(
            move |active| {
                let frames = active.then(|| {
                    let mut started = None;
                    FrameLoop::start(move |timestamp| {
                        let start = *started.get_or_insert(timestamp);
                        let elapsed = timestamp - start;
                        shown.set(count_up_value(target, elapsed, config));
                        elapsed < config.finished_at()
                    })
                });
                move || drop(frames)
            },
            props.active,
        );
    }

    html! {
        <div class="stat glass rv" style={format!("--d: {}ms", 100 * props.index)}>
            <div class="stat-value gradient-text">
                { *shown }{ props.stat.suffix }
            </div>
            <div class="stat-label">{ props.stat.label }</div>
        </div>
    }
}
