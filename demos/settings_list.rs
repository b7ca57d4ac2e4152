//! Settings-style list built from declarative rows

use eframe::egui;
use rowtable::{theme, Accessory, Link, TableRow, TableSection, TableView};
use tracing::info;

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,rowtable=debug"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();
}

struct DemoApp {
    table: TableView,
}

impl DemoApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons back the accessory glyphs
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let placeholder = cc.egui_ctx.load_texture(
            "placeholder",
            egui::ColorImage::new([48, 48], egui::Color32::from_gray(60)),
            egui::TextureOptions::LINEAR,
        );

        let mut avatar = TableRow::with_image_url(
            "Remote avatar",
            "Loads in the background",
            "https://picsum.photos/96",
        );
        avatar.set_image_placeholder(placeholder);

        let mut checked = TableRow::with_title("Notifications");
        checked.accessory = Accessory::Checkmark;

        let mut table = TableView::new();
        table.push_section(
            TableSection::new(vec![
                TableRow::with_title("General")
                    .on_select(|path, _| info!(?path, "General tapped"))
                    .boxed(),
                checked.boxed(),
                TableRow::with_title("Appearance")
                    .on_select(|path, _| info!(?path, "Appearance tapped"))
                    .boxed(),
            ])
            .with_header("Settings")
            .with_footer("Rows above route taps through their handlers."),
        );
        table.push_section(
            TableSection::new(vec![
                avatar.boxed(),
                TableRow::with_title("Project page")
                    .with_link(Link::Url("https://github.com".into()))
                    .boxed(),
                TableRow::with_colored_title("Sign out", egui::Color32::from_rgb(0xf8, 0x71, 0x71))
                    .on_select(|_, _| info!("Sign out tapped"))
                    .boxed(),
            ])
            .with_header("Account"),
        );

        Self { table }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_BASE))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.table.show(ui);
                });
            });
    }
}

fn main() -> eframe::Result<()> {
    init_logging();

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(420.0, 640.0))
        .with_title("rowtable demo");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "rowtable demo",
        options,
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc)))),
    )
}
