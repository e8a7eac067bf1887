#[cfg(target_arch = "wasm32")]
fn main() {
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(err) = native::run() {
        eprintln!("cube_cli error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use cube_engine::decomposition::{Layout, Term, compute_layout};
    use cube_engine::format;
    use cube_engine::scene::mesh::box_mesh;
    use std::fmt::Write as _;
    use std::fs;
    use std::path::{Path, PathBuf};

    const USAGE: &str = r#"cube_cli (cube-engine)

USAGE:
  cube_cli show <a> <b>
  cube_cli obj <a> <b> [options]

COMMANDS:
  show    Print the eight-box layout and the equation breakdown
  obj     Write the eight boxes as a Wavefront OBJ file

OPTIONS (obj):
  --out <path>   Output path (default: cube_<a>_<b>.obj)
  --overwrite    Overwrite an existing output file
  -h, --help     Show this help
"#;

    pub fn run() -> Result<(), String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut args = Args::new(args);

        let Some(command) = args.next() else {
            print_usage();
            return Ok(());
        };

        match command.as_str() {
            "show" => cmd_show(&mut args),
            "obj" => cmd_obj(&mut args),
            "-h" | "--help" | "help" => {
                print_usage();
                Ok(())
            }
            other => Err(format!("unknown command `{other}`\n\n{USAGE}")),
        }
    }

    fn print_usage() {
        println!("{USAGE}");
    }

    fn cmd_show(args: &mut Args) -> Result<(), String> {
        let layout = layout_from_args(args)?;

        println!(
            "binomial cube for a={} b={} (edge {})",
            layout.equation.a, layout.equation.b, layout.equation.sum
        );
        println!();
        println!(" idx  term   dims         center                 volume");
        for spec in &layout.boxes {
            let [w, h, d] = spec.dimensions;
            let [x, y, z] = spec.center;
            println!(
                "  {:>2}  {:<5}  {:<10}  {:<20}  {:>6}",
                spec.color_index,
                spec.term.label(),
                format!("{w}x{h}x{d}"),
                format!("({x}, {y}, {z})"),
                spec.volume(),
            );
        }

        println!();
        for line in format::plain_lines(&layout.equation) {
            println!("{line}");
        }
        Ok(())
    }

    fn cmd_obj(args: &mut Args) -> Result<(), String> {
        let layout = layout_from_args(args)?;

        let mut out: Option<PathBuf> = None;
        let mut overwrite = false;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--out" => out = Some(PathBuf::from(args.value("--out")?)),
                "--overwrite" => overwrite = true,
                "-h" | "--help" => {
                    print_usage();
                    return Ok(());
                }
                other => return Err(format!("unknown option `{other}`")),
            }
        }

        let path = out.unwrap_or_else(|| {
            PathBuf::from(format!(
                "cube_{}_{}.obj",
                layout.equation.a, layout.equation.b
            ))
        });
        if path.exists() && !overwrite {
            return Err(format!(
                "refusing to overwrite `{}` (use --overwrite)",
                path.display()
            ));
        }

        write_obj(&path, &layout)?;
        println!("wrote {}", path.display());
        Ok(())
    }

    fn layout_from_args(args: &mut Args) -> Result<Layout, String> {
        let a = parse_parameter(args.next().as_deref(), "a")?;
        let b = parse_parameter(args.next().as_deref(), "b")?;
        compute_layout(a, b).map_err(|err| err.to_string())
    }

    fn parse_parameter(raw: Option<&str>, name: &str) -> Result<i64, String> {
        let raw = raw.ok_or_else(|| format!("missing parameter <{name}>\n\n{USAGE}"))?;
        raw.parse::<i64>()
            .map_err(|_| format!("parameter <{name}> must be an integer, got `{raw}`"))
    }

    fn write_obj(path: &Path, layout: &Layout) -> Result<(), String> {
        let contents = obj_contents(layout);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|err| format!("cannot create `{}`: {err}", parent.display()))?;
            }
        }
        fs::write(path, contents).map_err(|err| format!("cannot write `{}`: {err}", path.display()))
    }

    fn obj_contents(layout: &Layout) -> String {
        let mut obj = String::new();
        let _ = writeln!(
            obj,
            "# binomial cube decomposition, a={} b={}",
            layout.equation.a, layout.equation.b
        );

        let mut offset = 1_usize;
        for spec in &layout.boxes {
            let mesh = box_mesh(spec);
            let _ = writeln!(obj, "g box{}_{}", spec.color_index, term_tag(spec.term));
            for [x, y, z] in &mesh.vertices {
                let _ = writeln!(obj, "v {x} {y} {z}");
            }
            for face in &mesh.faces {
                let indices: Vec<String> = face
                    .iter()
                    .map(|&index| (offset + index as usize).to_string())
                    .collect();
                let _ = writeln!(obj, "f {}", indices.join(" "));
            }
            offset += mesh.vertices.len();
        }

        obj
    }

    fn term_tag(term: Term) -> &'static str {
        match term {
            Term::ACubed => "a3",
            Term::BCubed => "b3",
            Term::ASquaredB => "a2b",
            Term::ABSquared => "ab2",
        }
    }

    struct Args {
        items: Vec<String>,
        index: usize,
    }

    impl Args {
        fn new(items: Vec<String>) -> Self {
            Self { items, index: 0 }
        }

        fn next(&mut self) -> Option<String> {
            let item = self.items.get(self.index).cloned();
            if item.is_some() {
                self.index += 1;
            }
            item
        }

        fn value(&mut self, flag: &str) -> Result<String, String> {
            self.next().ok_or_else(|| format!("{flag} expects a value"))
        }
    }

}
