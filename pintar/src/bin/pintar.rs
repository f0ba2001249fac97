// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command line front end for the `pintar` crate. Paint text, convert color specs, and
//! show the 256-color palette.
//!
//! ```text
//! pintar paint "hello" --fore "#F00" --style bold+underline
//! pintar convert "hsl(120, 100%, 25%)"
//! pintar brush --back 236 one two three
//! pintar palette
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use pintar::{Brush, Color, Dye, DyeStyle, HexColor, PaintStyle, PintarResult, TransformColor,
             parse_color, print_palette};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(bin_name = "pintar")]
#[command(about = "🎨 Paint terminal text with ANSI colors, and convert between color formats")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        value_enum,
        default_value_t = LogLevel::Off,
        help = "Log to stderr at this level"
    )]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Args)]
pub struct PaintOptions {
    #[arg(long, short = 'f', help = "Foreground: #RGB[A], #RRGGBB[AA], rgb(..), hsl(..), or 0-255")]
    pub fore: Option<String>,

    #[arg(long, short = 'b', help = "Background, same formats as --fore")]
    pub back: Option<String>,

    #[arg(long, short = 's', help = "Style: bold, italic, underline, strikethrough, joined by +")]
    pub style: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    #[clap(about = "🖌️ Paint a text and print it\n💡 Eg: `pintar paint hi --fore 196 --style bold`")]
    Paint {
        text: String,
        #[command(flatten)]
        paint_options: PaintOptions,
    },

    #[clap(about = "🔁 Print a color spec as RGB, HSL, hex and palette index\n💡 Eg: `pintar convert #FF8000`")]
    Convert { spec: String },

    #[clap(about = "🌈 Print all 256 palette colors")]
    Palette,

    #[clap(about = "🧹 Paint each text the same way, one per line\n💡 Eg: `pintar brush --back 236 a b c`")]
    Brush {
        #[arg(required = true)]
        texts: Vec<String>,
        #[command(flatten)]
        paint_options: PaintOptions,
    },
}

fn main() -> PintarResult<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CliArgs` struct.
    let cli_args = CliArgs::parse();

    init_tracing(cli_args.global_options.log_level.into());
    // % is Display, ? is Debug.
    tracing::debug!(message = "Start logging...", cli_args = ?cli_args);

    let result = run(cli_args.command);

    if let Err(error) = &result {
        tracing::error!(message = "Could not run pintar", error = ?error);
    }

    result
}

/// Install a `fmt` layer on stderr, so that logs never mix with the painted output on
/// stdout.
fn init_tracing(level_filter: LevelFilter) {
    if level_filter == LevelFilter::OFF {
        return;
    }
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_writer(std::io::stderr)
        .with_filter(level_filter);
    tracing_subscriber::registry().with(fmt_layer).init();
}

fn run(command: CliCommand) -> PintarResult<()> {
    match command {
        CliCommand::Paint {
            text,
            paint_options,
        } => {
            let paint = try_create_paint_style(&paint_options)?;
            println!("{}", Dye::new(text, paint));
        }
        CliCommand::Convert { spec } => {
            for line in convert_report(&parse_color(&spec)?) {
                println!("{line}");
            }
        }
        CliCommand::Palette => print_palette(),
        CliCommand::Brush {
            texts,
            paint_options,
        } => {
            let paint = Brush::load(&try_create_paint_style(&paint_options)?).into_fn();
            for text in &texts {
                println!("{}", paint(text));
            }
        }
    }
    Ok(())
}

/// Unlike the loosely typed [`PaintStyle::fore`], a value given on the command line
/// must be a valid color spec.
fn try_create_paint_style(options: &PaintOptions) -> PintarResult<PaintStyle> {
    let mut paint = PaintStyle::new();
    if let Some(fore) = &options.fore {
        paint = paint.with_fore(parse_color(fore)?);
    }
    if let Some(back) = &options.back {
        paint = paint.with_back(parse_color(back)?);
    }
    if let Some(style) = &options.style {
        paint = paint.with_style(DyeStyle::parse(style)?);
    }
    tracing::debug!(message = "paint style", paint = ?paint);
    Ok(paint)
}

fn convert_report(color: &Color) -> Vec<String> {
    let hex = HexColor::from_rgb(color.to_rgb());
    vec![
        format!("rgb:   {}", color.to_rgb().to_css()),
        format!("hsl:   {}", color.to_hsl().to_css()),
        format!("hex:   {}", hex.to_long_hex()),
        format!("short: {}", hex.to_short_hex()),
        format!("ansi:  {}", color.to_ansi_index()),
    ]
}
