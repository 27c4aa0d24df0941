//! Poster image loading

use super::{App, DecodedPosters};
use crate::renderer::FadeIn;
use crate::utils::decode_poster;
use eframe::egui;
use std::sync::PoisonError;
use std::time::Instant;
use tracing::debug;

pub enum PosterSlot {
    Loading,
    Ready {
        texture: egui::TextureHandle,
        fade: FadeIn,
    },
    Failed,
}

/// Queue a decode result, recovering the lock if a holder panicked
fn push_decoded(queue: &DecodedPosters, url: String, image: Option<egui::ColorImage>) {
    queue
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push((url, image));
}

fn take_decoded(queue: &DecodedPosters) -> Vec<(String, Option<egui::ColorImage>)> {
    std::mem::take(&mut *queue.lock().unwrap_or_else(PoisonError::into_inner))
}

/// A poster ready to paint
pub struct PosterImage {
    pub id: egui::TextureId,
    pub size: egui::Vec2,
    pub opacity: f32,
}

impl App {
    /// Texture for `url`, starting a download on first request
    pub(super) fn poster(&mut self, ctx: &egui::Context, url: &str) -> Option<PosterImage> {
        match self.posters.get(url) {
            None => {
                self.request_poster(ctx, url);
                None
            }
            Some(PosterSlot::Loading) | Some(PosterSlot::Failed) => None,
            Some(PosterSlot::Ready { texture, fade }) => {
                let now = Instant::now();
                if !fade.is_done(now) {
                    ctx.request_repaint();
                }
                Some(PosterImage {
                    id: texture.id(),
                    size: texture.size_vec2(),
                    opacity: fade.opacity(now),
                })
            }
        }
    }

    fn request_poster(&mut self, ctx: &egui::Context, url: &str) {
        self.posters.insert(url.to_string(), PosterSlot::Loading);

        let client = self.client.clone();
        let permits = self.poster_permits.clone();
        let decoded = self.decoded_posters.clone();
        let ctx = ctx.clone();
        let url = url.to_string();

        self.runtime.spawn(async move {
            let _permit = permits.acquire().await.ok();
            let bytes = match client.get(&url).send().await {
                Ok(response) if response.status().is_success() => response.bytes().await.ok(),
                Ok(response) => {
                    debug!(url = %url, status = %response.status(), "Poster request failed");
                    None
                }
                Err(e) => {
                    debug!(url = %url, error = %e, "Poster request failed");
                    None
                }
            };
            let image = match bytes {
                Some(bytes) => tokio::task::spawn_blocking(move || decode_poster(&bytes))
                    .await
                    .ok()
                    .flatten(),
                None => None,
            };
            push_decoded(&decoded, url, image);
            ctx.request_repaint();
        });
    }

    /// Upload decoded posters; the upload is the image's load event
    pub(crate) fn poll_posters(&mut self, ctx: &egui::Context) {
        for (url, image) in take_decoded(&self.decoded_posters) {
            let slot = match image {
                Some(image) => {
                    let texture = ctx.load_texture(&url, image, egui::TextureOptions::LINEAR);
                    PosterSlot::Ready {
                        texture,
                        fade: FadeIn::start(Instant::now()),
                    }
                }
                None => {
                    debug!(url = %url, "Poster could not be decoded");
                    PosterSlot::Failed
                }
            };
            self.posters.insert(url, slot);
        }
    }
}
