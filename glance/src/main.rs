mod cli;

use std::path::Path;

use cli::CliArgs;
use grayproc::GrayImage;

fn main() {
    let cli = match CliArgs::new() {
        Ok(cli) => cli,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };

    if cli.in_is_dir {
        directory(cli);
    } else {
        file(cli.clone(), &cli.in_path, &cli.out_path);
    }
}

fn file(cli: CliArgs, in_file: &Path, out_file: &Path) {
    let img = match grayproc::read_file(in_file) {
        Ok(img) => img,
        Err(e) => {
            println!("{}: {}", in_file.display(), e);
            return;
        }
    };

    let img = process(&cli, img);

    if let Err(e) = grayproc::write_file(&img, out_file, cli.rescale) {
        println!("{}: {}", out_file.display(), e);
    }
}

fn directory(cli: CliArgs) {
    let threadpool = threadpool::Builder::new().build();

    let contents = std::fs::read_dir(&cli.in_path).expect("Failed to read input directory");

    for entry in contents {
        let entry = entry.expect("Failed reading a file");
        let path = entry.path();

        match path.extension() {
            Some(ext) if ext == "pgm" => (),
            _ => continue,
        }

        let cliclone = cli.clone();

        let mut out_file = cli.out_path.clone();
        out_file.push(entry.file_name());

        if entry.metadata().expect("Failed getting a files metadata").is_file() {
            threadpool.execute(move || {
                file(cliclone, &path, &out_file);
            })
        }
    }

    threadpool.join();
}

fn process(cli: &CliArgs, mut img: GrayImage) -> GrayImage {
    if cli.negative {
        img = img.negative();
    }

    if cli.log {
        img = img.log_transform();
    }

    if let Some(gamma) = cli.gamma {
        img = img.gamma_transform(gamma);
    }

    if let Some(triple) = cli.threshold {
        img = img.threshold(triple.cutoff, triple.low, triple.high);
    }

    if cli.equalize {
        img = img.equalize_histogram();
    }

    if cli.dft {
        img = img.dft();
    }

    if cli.idft {
        img = img.idft();
    }

    img
}
