use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusPanelProps {
    pub remaining_mines: i32,
    pub lost: bool,
    pub on_new_game: Callback<()>,
}

#[function_component(StatusPanel)]
pub fn status_panel(props: &StatusPanelProps) -> Html {
    let new_game = {
        let cb = props.on_new_game.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="display:flex; align-items:center; gap:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 14px; min-width:280px; font-size:14px;">
            <span style="width:20px; text-align:center; flex-shrink:0;">{"💣"}</span>
            <span style="flex:1; font-weight:500;">{"Mines left"}</span>
            <span style="min-width:40px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;">{ props.remaining_mines }</span>
            { if props.lost {
                html! { <span style="color:#f85149; font-weight:600;">{"Boom!"}</span> }
            } else {
                html! {}
            } }
            <button onclick={new_game}>{"New Game"}</button>
        </div>
    }
}
