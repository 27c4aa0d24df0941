//! Modal dialogs (details overlay, demo alert)

use super::App;
use crate::constants::API_KEY_SIGNUP_URL;
use crate::overlay::DismissTrigger;
use crate::theme;
use crate::ui::components::{centered_text, close_button, cover_uv};
use eframe::egui;
use tracing::warn;

impl App {
    pub(crate) fn render_overlay(&mut self, ctx: &egui::Context) {
        if !self.page.overlay_visible {
            return;
        }

        // Dim backdrop behind the overlay - blocks interaction with the rows
        let screen = ctx.screen_rect();
        let backdrop = egui::Area::new(egui::Id::new("overlay_backdrop"))
            .fixed_pos(screen.min)
            .order(egui::Order::Middle)
            .interactable(true)
            .show(ctx, |ui| {
                let response = ui.allocate_response(screen.size(), egui::Sense::click());
                ui.painter().rect_filled(screen, 0.0, egui::Color32::from_black_alpha(200));
                response
            });

        let fields = self.page.overlay.clone();
        let mut close_clicked = false;

        egui::Window::new("details_overlay")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .frame(theme::modal_frame())
            .default_width(theme::OVERLAY_WIDTH)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.set_width(theme::OVERLAY_WIDTH);

                if let Some(url) = &fields.backdrop_url {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(theme::OVERLAY_WIDTH, theme::OVERLAY_BACKDROP_HEIGHT),
                        egui::Sense::hover(),
                    );
                    ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_SURFACE);
                    if let Some(image) = self.poster(ctx, url) {
                        let tint = egui::Color32::WHITE.gamma_multiply(image.opacity);
                        ui.painter().image(image.id, rect, cover_uv(image.size, rect.size()), tint);
                    }
                    ui.add_space(theme::SPACING_LG);
                }

                ui.horizontal_top(|ui| {
                    let poster_size = egui::vec2(theme::OVERLAY_POSTER.0, theme::OVERLAY_POSTER.1);
                    let (rect, _) = ui.allocate_exact_size(poster_size, egui::Sense::hover());
                    ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_SURFACE);
                    match self.poster(ctx, &fields.poster_url) {
                        Some(image) => {
                            let tint = egui::Color32::WHITE.gamma_multiply(image.opacity);
                            ui.painter().image(image.id, rect, cover_uv(image.size, poster_size), tint);
                        }
                        None => centered_text(
                            ui.painter(),
                            rect.shrink(theme::SPACING_MD),
                            &fields.title,
                            theme::FONT_LABEL,
                            theme::TEXT_DIM,
                        ),
                    }

                    ui.add_space(theme::SPACING_XL);
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(&fields.title)
                                    .size(theme::FONT_TITLE)
                                    .strong()
                                    .color(theme::TEXT_PRIMARY),
                            );
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                                if close_button(ui, theme::CLOSE_BUTTON_SIZE).clicked() {
                                    close_clicked = true;
                                }
                            });
                        });
                        ui.add_space(theme::SPACING_SM);
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(&fields.rating).color(theme::RATING).strong());
                            ui.add_space(theme::SPACING_MD);
                            ui.label(egui::RichText::new(&fields.year).color(theme::TEXT_MUTED));
                        });
                        ui.add_space(theme::SPACING_LG);
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&fields.overview)
                                    .size(theme::FONT_BODY)
                                    .color(theme::TEXT_SECONDARY),
                            )
                            .wrap(),
                        );
                    });
                });
            });

        if close_clicked {
            self.interaction.dismiss(&mut self.page, DismissTrigger::CloseButton);
        } else if backdrop.inner.clicked() {
            // The window sits above the backdrop, so this click missed the content
            self.interaction.backdrop_click(&mut self.page, false);
        }
    }

    pub(crate) fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.page.alert.clone() else {
            return;
        };

        let mut dismiss = false;
        let modal = egui::Modal::new(egui::Id::new("demo_alert"))
            .backdrop_color(egui::Color32::from_black_alpha(160))
            .frame(theme::modal_frame());
        let response = modal.show(ctx, |ui| {
            ui.set_width(380.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::INFO)
                        .size(theme::FONT_TITLE)
                        .color(theme::STATUS_WARNING),
                );
                ui.label(egui::RichText::new("Demo mode").size(theme::FONT_HEADING).strong());
            });
            ui.add_space(theme::SPACING_MD);
            ui.add(egui::Label::new(egui::RichText::new(&message).color(theme::TEXT_SECONDARY)).wrap());
            ui.add_space(theme::SPACING_XL);
            ui.horizontal(|ui| {
                if ui.add(theme::button_accent("OK")).clicked() {
                    dismiss = true;
                }
                let link = format!("{}  Get API key", egui_phosphor::regular::ARROW_SQUARE_OUT);
                if ui.add(theme::button(link)).clicked() {
                    if let Err(e) = open::that(API_KEY_SIGNUP_URL) {
                        warn!(error = %e, "Failed to open browser");
                    }
                }
            });
        });

        if dismiss || response.should_close() {
            self.page.dismiss_alert();
        }
    }
}
