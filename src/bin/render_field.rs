//! Render a text field appearance stream to stdout.
//!
//! Builds a sample text field, applies the given value and style, runs the
//! save hook and dumps the resulting operator stream. Useful for eyeballing
//! exactly what a viewer will receive under /AP /N.
//!
//! Usage:
//!   cargo run --bin render_field -- --value "John Doe" --border 2
//!   RUST_LOG=debug cargo run --bin render_field -- --width 100 --height 40

use pdf_formfill::document::ObjectStore;
use pdf_formfill::geometry::Rect;
use pdf_formfill::writer::form_fields::{PaintColor, TextFieldWidget};

struct RenderConfig {
    value: String,
    width: f32,
    height: f32,
    border: i64,
}

impl RenderConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut config = Self {
            value: "Sample".to_string(),
            width: 200.0,
            height: 20.0,
            border: 1,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--value" => {
                    i += 1;
                    if i < args.len() {
                        config.value = args[i].clone();
                    }
                },
                "--width" => {
                    i += 1;
                    if i < args.len() {
                        config.width = args[i].parse().unwrap_or(config.width);
                    }
                },
                "--height" => {
                    i += 1;
                    if i < args.len() {
                        config.height = args[i].parse().unwrap_or(config.height);
                    }
                },
                "--border" => {
                    i += 1;
                    if i < args.len() {
                        config.border = args[i].parse().unwrap_or(config.border);
                    }
                },
                _ => {},
            }
            i += 1;
        }

        config
    }
}

fn main() -> pdf_formfill::Result<()> {
    env_logger::init();
    let config = RenderConfig::from_args();

    let mut store = ObjectStore::new();
    let mut field = TextFieldWidget::new(
        "sample",
        Rect::new(0.0, 0.0, config.width, config.height),
    )
    .with_background_color(PaintColor::Rgb(1.0, 1.0, 1.0))
    .with_border_color(PaintColor::Gray(0.0))
    .with_border_width(config.border);

    field.set_value(&mut store, config.value)?;
    field.prepare_for_save(&mut store)?;

    let appearance = field
        .appearance_ref()
        .expect("save hook always links an appearance");
    println!("appearance object: {}", appearance);

    let data = store.get_stream_data(appearance)?;
    println!("--- content stream ({} bytes) ---", data.len());
    print!("{}", String::from_utf8_lossy(data));

    Ok(())
}
