use super::{board_view::BoardView, status_panel::StatusPanel};
use crate::model::{GameAction, GameState, GridSize};
use crate::state::PendingRestart;
use crate::util::clog;
use yew::prelude::*;

const BOARD_ROWS: u32 = 15;
const BOARD_COLS: u32 = 15;
const MINE_COUNT: u32 = 20;
/// Delay between a loss and the automatic restart.
const RESTART_DELAY_MS: i32 = 1000;

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(|| {
        GameState::new(
            GridSize {
                rows: BOARD_ROWS,
                cols: BOARD_COLS,
            },
            MINE_COUNT,
        )
    });
    let pending_restart = use_mut_ref(|| None::<PendingRestart>);

    // Schedule the auto-restart when the board is lost. The handle is
    // replaced (and the old timeout cleared) whenever `lost` flips, so a
    // manual New Game before the timer fires cancels it instead of
    // racing it.
    {
        let game = game.clone();
        let pending_restart = pending_restart.clone();
        use_effect_with(game.lost, move |&lost| {
            if lost {
                clog("mine revealed, board lost; restarting shortly");
                let game = game.clone();
                *pending_restart.borrow_mut() =
                    PendingRestart::schedule(RESTART_DELAY_MS, move || {
                        clog("auto-restart");
                        game.dispatch(GameAction::Restart);
                    });
            } else {
                *pending_restart.borrow_mut() = None;
            }
            || ()
        });
    }

    let on_new_game = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::Restart))
    };

    html! {
        <div style="min-height:100vh; display:flex; flex-direction:column; align-items:center; gap:16px; padding-top:32px; background:#0e1116; color:#c9d1d9; font-family:sans-serif;">
            <h1 style="margin:0; font-size:24px;">{"Minesweeper"}</h1>
            <StatusPanel
                remaining_mines={game.remaining_mines()}
                lost={game.lost}
                on_new_game={on_new_game}
            />
            <BoardView game={game.clone()} />
        </div>
    }
}
