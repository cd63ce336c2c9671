use ggez::{
    graphics::{Canvas, Color, DrawMode, DrawParam, Mesh, MeshBuilder, Rect, Text},
    Context, GameResult,
};
use glam;

use crate::{constant, session::Session};

use super::SceneDrawable;

fn text(s: String) -> Text {
    let mut text = Text::new(s);
    text.set_scale(constant::FONT_SIZE);
    text
}

fn glyph(c: char) -> char {
    if c.is_control() {
        '\u{b7}'
    } else {
        c
    }
}

fn row_dest(row: usize) -> glam::Vec2 {
    glam::vec2(
        constant::MARGIN,
        constant::MARGIN + constant::CELL_HEIGHT * row as f32,
    )
}

fn cell_dest(x: usize, y: usize) -> glam::Vec2 {
    glam::vec2(
        constant::MARGIN + constant::CELL_WIDTH * x as f32,
        constant::GRID_OFFSET_Y + constant::CELL_HEIGHT * y as f32,
    )
}

fn cell_rect(x: usize, y: usize) -> Rect {
    let pos = cell_dest(x, y);
    Rect::new(pos.x, pos.y, constant::CELL_WIDTH, constant::CELL_HEIGHT)
}

pub(super) fn draw_line(canvas: &mut Canvas, row: usize, line: String, color: Color) {
    canvas.draw(&text(line), DrawParam::default().dest(row_dest(row)).color(color));
}

impl SceneDrawable for Session {
    fn draw(&self, ctx: &mut Context, canvas: &mut Canvas) -> GameResult<()> {
        let vm = self.vm();
        let (ip_x, ip_y) = vm.position();

        draw_line(canvas, 0, self.header(), constant::TEXT_COLOR);

        let mut mb = MeshBuilder::new();
        mb.rectangle(DrawMode::fill(), cell_rect(ip_x, ip_y), constant::IP_COLOR)?;
        if let Some((x, y)) = self.last_write() {
            mb.rectangle(DrawMode::stroke(1.0), cell_rect(x, y), constant::WRITTEN_COLOR)?;
        }
        let marks = Mesh::from_data(ctx, mb.build());
        canvas.draw(&marks, DrawParam::default());

        for (y, row) in vm.grid().rows().enumerate() {
            for (x, c) in row.iter().enumerate() {
                if *c == ' ' {
                    continue;
                }
                let color = if (x, y) == (ip_x, ip_y) {
                    constant::BG_COLOR
                } else {
                    constant::TEXT_COLOR
                };
                canvas.draw(
                    &text(glyph(*c).to_string()),
                    DrawParam::default().dest(cell_dest(x, y)).color(color),
                );
            }
        }

        draw_line(canvas, constant::STATUS_ROW, self.status_line(), constant::TEXT_COLOR);

        for (n, line) in self.log().tail(constant::LOG_ROWS).enumerate() {
            draw_line(
                canvas,
                constant::LOG_ROW + n,
                line.to_string(),
                constant::DIM_COLOR,
            );
        }

        Ok(())
    }
}
