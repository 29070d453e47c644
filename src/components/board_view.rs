use super::cell_view::CellView;
use crate::model::{GameAction, GameState};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardViewProps {
    pub game: UseReducerHandle<GameState>,
}

#[function_component(BoardView)]
pub fn board_view(props: &BoardViewProps) -> Html {
    let on_reveal = {
        let game = props.game.clone();
        Callback::from(move |(x, y): (u32, u32)| game.dispatch(GameAction::Reveal { x, y }))
    };
    let on_flag = {
        let game = props.game.clone();
        Callback::from(move |(x, y): (u32, u32)| game.dispatch(GameAction::ToggleFlag { x, y }))
    };

    let size = props.game.grid_size;
    // The whole container signals the lost state, not just the exploded
    // cell.
    let border = if props.game.lost { "#f85149" } else { "#30363d" };
    let board_style = format!(
        "display:grid; grid-template-columns:repeat({}, 28px); gap:2px; padding:8px; background:#161b22; border:2px solid {}; border-radius:8px;",
        size.cols, border
    );

    html! {
        <div style={board_style} oncontextmenu={Callback::from(|e: MouseEvent| e.prevent_default())}>
            {
                (0..size.rows)
                    .flat_map(|y| (0..size.cols).map(move |x| (x, y)))
                    .map(|(x, y)| {
                        let cell = props.game.cells[size.index(x, y)];
                        html! {
                            <CellView
                                key={size.index(x, y)}
                                x={x}
                                y={y}
                                cell={cell}
                                on_reveal={on_reveal.clone()}
                                on_flag={on_flag.clone()}
                            />
                        }
                    })
                    .collect::<Html>()
            }
        </div>
    }
}
