use clap::Parser;

use cornercube::prelude::*;

/// Corner-cubie diagnostics for the Rubik's Cube
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Apply a sequence of quarter turns (letters R, U, F, L, D, B) to the
	/// solved cube
	#[arg(short, default_value_t = String::new())]
	sequence: String,

	/// Also print the corner coordinates of the resulting state
	#[arg(long, default_value_t = false)]
	coords: bool,

	/// Print the move-adjacency pruning table as a constant literal and
	/// exit
	#[arg(long, default_value_t = false)]
	emit_pruning: bool,
}

fn main() {
	let args = Args::parse();

	if args.emit_pruning {
		print!("{}", emit_table("VALID_MOVES"));
		return;
	}

	let turns = match parse_quarter_turns(&args.sequence) {
		Ok(turns) => turns,
		Err(e) => {
			eprintln!("invalid sequence: {}", e);
			std::process::exit(1);
		}
	};

	let mut cube = CornerCube::new();
	cube.apply_turns(&turns);

	if let Err(e) = cube.verify_colors() {
		eprintln!("{}", e);
		std::process::exit(1);
	}

	cube.print();

	if args.coords {
		println!("orientation coordinate: {}", cube.orientation_coord());
		println!("permutation coordinate: {}", cube.permutation_coord());
		println!("pattern index:          {}", cube.pattern_index());
	}
}
