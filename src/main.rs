use flatcast::image::PpmFormat;
use flatcast::*;

use getopts::Options;
use log::*;
use std::path::PathBuf;
use std::process;

#[derive(Debug)]
struct Args {
    width: u32,
    height: u32,
    input: PathBuf,
    output: PathBuf,
    format: PpmFormat,
    config: RenderConfig,
    limits: SceneLimits,
    verbose: bool,
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("f", "format", "PPM flavour, p3 or p6 (default p6)", "FORMAT");
    opts.optopt(
        "b",
        "background",
        "color of pixels that hit nothing (default 0,0,0)",
        "R,G,B",
    );
    opts.optopt(
        "m",
        "max-objects",
        "largest accepted scene, 0 for no limit (default 128)",
        "N",
    );
    opts.optflag("v", "verbose", "log scene and render details");
    opts.optflag("h", "help", "print this help");
    opts
}

fn usage(program: &str) -> String {
    let brief = format!(
        "Usage: {} [options] WIDTH HEIGHT INPUT.json OUTPUT.ppm",
        program
    );
    options().usage(&brief)
}

fn dimension(name: &str, s: &str) -> Result<u32, String> {
    match s.parse::<u32>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(format!("{} must be an integer > 0, got '{}'", name, s)),
    }
}

/// `Ok(None)` when only help was asked for.
fn parse_args(argv: &[String]) -> Result<Option<Args>, String> {
    let matches = options()
        .parse(argv.iter().skip(1))
        .map_err(|e| e.to_string())?;
    if matches.opt_present("h") {
        return Ok(None);
    }
    if matches.free.len() != 4 {
        return Err(format!(
            "expected 4 arguments, got {}",
            matches.free.len()
        ));
    }

    let format = match matches.opt_str("f") {
        Some(f) => f.parse::<PpmFormat>().map_err(|e| e.to_string())?,
        None => PpmFormat::default(),
    };
    let background = match matches.opt_str("b") {
        Some(b) => b.parse::<RGB>().map_err(|e| e.to_string())?,
        None => RGB::black(),
    };
    let limits = match matches.opt_str("m") {
        Some(m) => match m.parse::<usize>() {
            Ok(0) => SceneLimits::unlimited(),
            Ok(n) => SceneLimits {
                max_objects: Some(n),
            },
            Err(_) => return Err(format!("max-objects must be an integer, got '{}'", m)),
        },
        None => SceneLimits::default(),
    };

    Ok(Some(Args {
        width: dimension("width", &matches.free[0])?,
        height: dimension("height", &matches.free[1])?,
        input: PathBuf::from(&matches.free[2]),
        output: PathBuf::from(&matches.free[3]),
        format,
        config: RenderConfig { background },
        limits,
        verbose: matches.opt_present("v"),
    }))
}

fn run(args: &Args) -> Result<(), Error> {
    let scene = loader::from_path(&args.input, &args.limits)?;
    let image = Renderer::new(args.config).render(&scene, args.width, args.height)?;
    image.save_ppm(&args.output, args.format)?;
    info!("wrote {}", args.output.display());
    Ok(())
}

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let program = argv.first().map_or("flatcast", String::as_str).to_owned();

    let args = match parse_args(&argv) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{}", usage(&program));
            return;
        }
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprint!("{}", usage(&program));
            process::exit(1);
        }
    };

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: render aborted: {}", e);
        process::exit(1);
    }
}
