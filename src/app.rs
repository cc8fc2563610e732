//! Application shell
//!
//! Owns the tile tree, the pane registry, and the content loader, and
//! drives one frame as: drain completed fetches → collect keyboard
//! commands → draw the tree (collecting more commands) → apply commands.
//! Tree mutation therefore always happens between frames' draw passes,
//! never during one, and a structural mutation re-syncs every surface
//! before any stale fetch for an old identity can be applied.

use std::collections::HashMap;
use std::sync::Arc;

use egui::Rect;
use tokio::runtime::Runtime;
use url::Url;

use filedeck_config::{Config, PaneId};
use filedeck_protocol::ApiClient;

use crate::input;
use crate::loader::ContentLoader;
use crate::registry::PaneRegistry;
use crate::tile::TileTree;
use crate::ui::layout::{self, LayoutParams, ResizeDrag, TreeView};
use crate::ui::Command;

pub struct FiledeckApp {
    config: Config,
    tree: TileTree,
    registry: PaneRegistry,
    loader: ContentLoader,
    drag: Option<ResizeDrag>,
    /// Pane rects from the last draw pass, for directional focus moves
    pane_rects: HashMap<PaneId, Rect>,
}

impl FiledeckApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        runtime: Arc<Runtime>,
    ) -> anyhow::Result<Self> {
        // Image projections render via egui's byte/http loaders
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let font_size = config.font_size;
        cc.egui_ctx.style_mut(|style| {
            use egui::TextStyle;
            for text_style in [TextStyle::Body, TextStyle::Monospace, TextStyle::Button] {
                if let Some(font) = style.text_styles.get_mut(&text_style) {
                    font.size = font_size;
                }
            }
        });

        let base = Url::parse(&config.server_url)?;
        let client = ApiClient::new(base);
        let loader = ContentLoader::new(runtime, client, cc.egui_ctx.clone());

        let tree = TileTree::new(config.start_path.clone());
        let mut registry = PaneRegistry::new();
        loader.request_all(registry.sync_all(&tree));

        Ok(Self {
            config,
            tree,
            registry,
            loader,
            drag: None,
            pane_rects: HashMap::new(),
        })
    }

    /// Full reconciliation after a structural mutation (split/close)
    fn structural_sync(&mut self) {
        self.loader.request_all(self.registry.sync_all(&self.tree));
    }

    /// Single-pane reconciliation after navigation or a projection switch
    fn refresh_pane(&mut self, id: PaneId) {
        if let Some(request) = self.registry.refresh(id, &self.tree) {
            self.loader.request(request);
        }
    }

    fn apply(&mut self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::Focus(id) => self.tree.focus(id),
                Command::Split(id, direction) => {
                    if self.tree.split_pane(id, direction).is_some() {
                        self.structural_sync();
                    }
                }
                Command::Close(id) => {
                    if self.tree.close_pane(id) {
                        self.structural_sync();
                    }
                }
                Command::Navigate(id, path) => {
                    if self.tree.navigate_pane(id, path) {
                        self.refresh_pane(id);
                    }
                }
                Command::SwitchProjection(id, projection) => {
                    if self.tree.switch_projection(id, projection) {
                        self.refresh_pane(id);
                    }
                }
                Command::Resize {
                    split_id,
                    handle_index,
                    first,
                    second,
                } => {
                    // Live feedback path: sizes only, no sync, no fetches
                    self.tree
                        .resize_children(split_id, handle_index, first, second);
                }
            }
        }
    }
}

impl eframe::App for FiledeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for outcome in self.loader.drain() {
            self.registry.complete(outcome);
        }

        let mut commands = input::handle_shortcuts(ctx, &self.tree, &self.pane_rects);

        let view = TreeView {
            registry: &self.registry,
            client: self.loader.client(),
            params: LayoutParams {
                divider_width: self.config.divider_width,
                divider_hit_width: self.config.divider_hit_width,
                min_pane_percent: self.config.min_pane_percent,
            },
            active: self.tree.active_pane_id(),
        };

        let mut pane_rects = HashMap::new();
        let mut drag = self.drag;
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                layout::draw_node(
                    ui,
                    &view,
                    self.tree.root(),
                    rect,
                    &mut drag,
                    &mut pane_rects,
                    &mut commands,
                );
            });
        self.drag = drag;
        self.pane_rects = pane_rects;

        self.apply(commands);
    }
}
