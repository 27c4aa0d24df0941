//! View rendering (header, category rows, tiles)

use super::App;
use crate::constants::APP_NAME;
use crate::overlay;
use crate::placeholder;
use crate::surface::{ContainerContent, PlaceholderTile, PosterTile};
use crate::theme;
use crate::types::{Category, MediaRecord};
use crate::ui::components::{centered_text, cover_uv, gradient_block};
use eframe::egui;

/// What a click inside a row asked for
enum TileClick {
    Poster(MediaRecord),
    Placeholder(String),
}

impl App {
    pub(crate) fn render_header(&mut self, ctx: &egui::Context) {
        let (fill, shadow) = if self.page.header_shadow {
            (
                theme::BG_HEADER_SCROLLED,
                egui::epaint::Shadow {
                    offset: [0, 2],
                    blur: 10,
                    spread: 0,
                    color: egui::Color32::from_black_alpha(160),
                },
            )
        } else {
            (theme::BG_BASE, egui::epaint::Shadow::NONE)
        };

        let mut refresh = false;
        egui::TopBottomPanel::top("header")
            .exact_height(theme::HEADER_HEIGHT)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(fill)
                    .shadow(shadow)
                    .inner_margin(egui::Margin::symmetric(theme::ROW_SIDE_MARGIN as i8, 0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(APP_NAME.to_uppercase())
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::ACCENT),
                    );
                    if self.mode.is_placeholder() {
                        ui.add_space(theme::SPACING_MD);
                        ui.label(
                            egui::RichText::new("DEMO")
                                .size(theme::FONT_SMALL)
                                .color(theme::STATUS_WARNING),
                        )
                        .on_hover_text("No TMDB API key configured");
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = format!("{}  Refresh", egui_phosphor::regular::ARROW_CLOCKWISE);
                        if ui.add(theme::button(label)).clicked() {
                            refresh = true;
                        }
                        if self.pending_fetches > 0 {
                            ui.add_space(theme::SPACING_MD);
                            ui.spinner();
                            ui.label(
                                egui::RichText::new(format!("Loading {} rows", self.pending_fetches))
                                    .size(theme::FONT_SMALL)
                                    .color(theme::TEXT_MUTED),
                            );
                        }
                    });
                });
            });

        if refresh {
            self.start_catalog(ctx);
        }
    }

    pub(crate) fn render_rows(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_BASE))
            .show(ctx, |ui| {
                let output = egui::ScrollArea::vertical()
                    .id_salt("page_scroll")
                    .auto_shrink([false, false])
                    .enable_scrolling(!self.page.scroll_locked)
                    .show(ui, |ui| {
                        ui.add_space(theme::SPACING_XL);
                        for category in Category::ALL {
                            self.render_row(ui, ctx, category);
                            ui.add_space(theme::SPACING_XL);
                        }
                    });
                self.interaction.on_scroll(&mut self.page, output.state.offset.y);
            });
    }

    fn render_row(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, category: Category) {
        ui.horizontal(|ui| {
            ui.add_space(theme::ROW_SIDE_MARGIN);
            ui.label(
                egui::RichText::new(category.title())
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::TEXT_SECONDARY),
            );
        });
        ui.add_space(theme::SPACING_SM);

        // Clone tiles to avoid borrow issues while loading posters
        let content = self.page.container(category).clone();
        let mut clicked: Option<TileClick> = None;

        let mut area = egui::ScrollArea::horizontal()
            .id_salt(category.container_id())
            .auto_shrink([false, true])
            .drag_to_scroll(false);
        if let Some(offset) = self.row_scroll_to.remove(&category) {
            area = area.horizontal_scroll_offset(offset);
        }

        let output = area.show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add_space(theme::ROW_SIDE_MARGIN);
                ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
                match &content {
                    ContainerContent::Empty => {
                        let height = theme::poster_dimensions(category.poster_size()).y;
                        ui.allocate_ui(egui::vec2(200.0, height), |ui| {
                            if self.pending_fetches > 0 {
                                ui.spinner();
                            }
                        });
                    }
                    ContainerContent::Error(message) => {
                        ui.add_space(theme::SPACING_LG);
                        ui.label(egui::RichText::new(message).color(theme::TEXT_MUTED));
                    }
                    ContainerContent::Posters(tiles) => {
                        for tile in tiles {
                            if self.poster_tile(ui, ctx, tile).clicked() {
                                clicked = Some(TileClick::Poster(tile.record.clone()));
                            }
                        }
                    }
                    ContainerContent::Placeholders(tiles) => {
                        for tile in tiles {
                            if placeholder_tile(ui, tile).clicked() {
                                clicked = Some(TileClick::Placeholder(tile.title.clone()));
                            }
                        }
                    }
                }
                ui.add_space(theme::ROW_SIDE_MARGIN);
            });
        });

        self.row_offsets.insert(category, output.state.offset.x);
        self.handle_row_drag(ctx, category, output.inner_rect);

        match clicked {
            Some(TileClick::Poster(record)) => overlay::open(&mut self.page, &record),
            Some(TileClick::Placeholder(title)) => placeholder::show_demo(&mut self.page, &title),
            None => {}
        }
    }

    /// Drag-to-scroll: press inside the row, move to scroll, release or
    /// leave the row to stop
    fn handle_row_drag(&mut self, ctx: &egui::Context, category: Category, rect: egui::Rect) {
        if self.page.overlay_visible || self.page.alert.is_some() {
            self.interaction.drag_end(category);
            return;
        }

        let (pressed, down, pos) = ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.interact_pos(),
            )
        });
        let Some(pos) = pos else {
            self.interaction.drag_end(category);
            return;
        };
        let inside = rect.contains(pos);

        if pressed && inside {
            let offset = self.row_offsets.get(&category).copied().unwrap_or(0.0);
            self.interaction.drag_start(category, pos.x, offset);
        }

        if !self.interaction.is_dragging(category) {
            // Tiles set their own cursor
            if inside && ctx.output(|o| o.cursor_icon) == egui::CursorIcon::Default {
                ctx.set_cursor_icon(egui::CursorIcon::Grab);
            }
            return;
        }
        if !down || !inside {
            self.interaction.drag_end(category);
            return;
        }
        if let Some(target) = self.interaction.drag_move(category, pos.x) {
            if (target - self.row_offsets.get(&category).copied().unwrap_or(0.0)).abs() > f32::EPSILON {
                self.row_scroll_to.insert(category, target);
                ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
                ctx.request_repaint();
            }
        }
    }

    fn poster_tile(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, tile: &PosterTile) -> egui::Response {
        let size = theme::poster_dimensions(tile.size);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_ELEVATED);

            match self.poster(ctx, &tile.image_url) {
                Some(image) => {
                    let tint = egui::Color32::WHITE.gamma_multiply(image.opacity);
                    ui.painter().image(image.id, rect, cover_uv(image.size, size), tint);
                }
                None => {
                    centered_text(ui.painter(), rect.shrink(theme::SPACING_MD), &tile.alt, theme::FONT_LABEL, theme::TEXT_DIM);
                }
            }

            if response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                ui.painter().rect_stroke(
                    rect,
                    theme::RADIUS_DEFAULT,
                    egui::Stroke::new(theme::STROKE_MEDIUM, theme::TEXT_PRIMARY),
                    egui::StrokeKind::Inside,
                );
            }
        }

        response.on_hover_text(tile.alt.as_str())
    }
}

fn placeholder_tile(ui: &mut egui::Ui, tile: &PlaceholderTile) -> egui::Response {
    let size = theme::poster_dimensions(tile.size);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let (from, to) = if response.hovered() {
            (
                theme::lighten(theme::PLACEHOLDER_FROM, 0.1),
                theme::lighten(theme::PLACEHOLDER_TO, 0.1),
            )
        } else {
            (theme::PLACEHOLDER_FROM, theme::PLACEHOLDER_TO)
        };
        gradient_block(ui.painter(), rect, from, to);
        centered_text(
            ui.painter(),
            rect.shrink(20.0),
            &tile.title,
            theme::FONT_BODY,
            theme::TEXT_PRIMARY,
        );
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
    }

    response
}
