use crate::bounce::Bouncer;
use crate::world::{Position, World};

/// ANSI "clear screen" followed by "cursor to top-left".
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[0;0H";

/// One frame of the food world: `O` is the food, `X` the yop. When they
/// share a cell the food is shown.
pub fn draw_world(world: &World) -> String {
    draw_grid(world.size, world.size, |pos| {
        if pos == world.food {
            'O'
        } else if pos == world.yop {
            'X'
        } else {
            ' '
        }
    })
}

/// One frame of the bouncing point, drawn as `*`.
pub fn draw_bounce(bouncer: &Bouncer) -> String {
    let point = bouncer.position();
    draw_grid(bouncer.width(), bouncer.height(), |pos| if pos == point { '*' } else { ' ' })
}

fn draw_grid<F: Fn(Position) -> char>(width: i32, height: i32, cell: F) -> String {
    let width = width.max(0);
    let height = height.max(0);
    let border = "-".repeat(width as usize + 2);

    let mut frame = String::with_capacity(CLEAR_SCREEN.len() + (width as usize + 3) * (height as usize + 2));
    frame.push_str(CLEAR_SCREEN);
    frame.push_str(&border);
    frame.push('\n');
    for y in 0..height {
        frame.push('|');
        frame.extend((0..width).map(|x| cell(Position::new(x, y))));
        frame.push_str("|\n");
    }
    frame.push_str(&border);
    frame.push('\n');
    frame
}
