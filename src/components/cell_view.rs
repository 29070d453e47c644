use crate::model::Cell;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CellViewProps {
    pub x: u32,
    pub y: u32,
    pub cell: Cell,
    pub on_reveal: Callback<(u32, u32)>,
    pub on_flag: Callback<(u32, u32)>,
}

fn digit_color(count: u8) -> &'static str {
    match count {
        1 => "#58a6ff",
        2 => "#2ea043",
        3 => "#f85149",
        4 => "#bc8cff",
        5 => "#d4af37",
        6 => "#39c5cf",
        7 => "#f0883e",
        _ => "#8b949e",
    }
}

#[function_component(CellView)]
pub fn cell_view(props: &CellViewProps) -> Html {
    let cell = props.cell;
    let onclick = {
        let on_reveal = props.on_reveal.clone();
        let pos = (props.x, props.y);
        Callback::from(move |_: MouseEvent| on_reveal.emit(pos))
    };
    let oncontextmenu = {
        let on_flag = props.on_flag.clone();
        let pos = (props.x, props.y);
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_flag.emit(pos);
        })
    };

    let background = if cell.is_exploded {
        "#e51f12"
    } else if cell.is_revealed {
        "#0e1116"
    } else {
        "#1d2430"
    };
    let color = if cell.is_revealed && !cell.is_mine {
        digit_color(cell.adjacent_mines)
    } else {
        "#c9d1d9"
    };
    let style = format!(
        "width:28px; height:28px; display:flex; align-items:center; justify-content:center; background:{}; color:{}; border:1px solid #30363d; border-radius:3px; font-weight:600; font-size:14px; cursor:pointer; user-select:none;",
        background, color
    );

    // Flags stay visible even once the lost board is force-revealed.
    let glyph = if cell.is_flagged {
        "🚩".to_string()
    } else if !cell.is_revealed {
        String::new()
    } else if cell.is_mine {
        "💣".to_string()
    } else if cell.adjacent_mines > 0 {
        cell.adjacent_mines.to_string()
    } else {
        String::new()
    };

    html! {
        <div style={style} {onclick} {oncontextmenu}>
            <span>{ glyph }</span>
        </div>
    }
}
