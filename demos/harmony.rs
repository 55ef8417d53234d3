//! Write `harmony.html`: every harmony scheme around a base color,
//! the color wheel and the exported snippets.
//!
//!     cargo run --example harmony -- "#e94560" 6

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use color_harmony::{export, parse_hex, ColorRange, ExportOptions,
                    HarmonyScheme, Palette, RGBColor, Snippet, WcagLevel};
use tracing::info;
use tracing_subscriber::EnvFilter;

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}; color: {}\">{}</td>",
                 c.to_hex(), c.contrast_color().to_hex(), c.name())?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 c.to_gray().to_hex())?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let mut args = env::args().skip(1);
    let base = parse_hex(&args.next().unwrap_or_else(|| "#e94560".into()))?;
    let count: usize = match args.next() {
        Some(n) => n.parse()?,
        None => 5 };
    info!(base = %base.to_hex(), count, "writing harmony.html");

    let mut fh = BufWriter::new(File::create("harmony.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Harmonies of {}</title>\n\
                  </head>\n\
                  <body>", base.to_hex())?;

    let hsl = base.to_hsl();
    writeln!(fh, "<h3>Wheel at {hsl}</h3>")?;
    let wheel: Vec<_> = RGB8::wheel(hsl.s, hsl.l).range(0., 360., 36)
        .map(|(_, c)| c).collect();
    table_of_colors(&mut fh, &wheel, 13, "")?;

    writeln!(fh, "<h3>Harmonies</h3>")?;
    for scheme in HarmonyScheme::ALL {
        let p = base.harmony(scheme, count);
        let c = match p.min_contrast_ratio() {
            Some(r) => format!("{scheme} (min. contrast {r:.2}, {:?})",
                               WcagLevel::of_ratio(r)),
            None => scheme.to_string() };
        table_of_colors(&mut fh, p.colors(), 80, &c)?;
    }

    writeln!(fh, "<h3>Snippets</h3>")?;
    let p: Palette = base.harmony(HarmonyScheme::SplitComplementary, count);
    for kind in Snippet::ALL {
        writeln!(fh, "<h4>{kind}</h4>\n<pre>{}</pre>",
                 export(&p, kind, &ExportOptions::default()))?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
