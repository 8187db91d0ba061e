#![doc = r#"
fmuconfig: convert a "global variables" YAML master into the files a
modeling workflow consumes.

The master is a YAML mapping with a `global` section of shared variables and
optional tool sections (`rms`, `eclipse`, ...). fmuconfig exports it as an IPL
variable-definition script or as a YAML restatement, filtered to one tool
section, in a destination flavour (actual values) and/or a template flavour
(`<placeholder>` tokens).

Annotated values
----------------
A string written as `value ~ <TOKEN>` carries both renderings:

```yaml
global:
  NZONES: 3
  PORO: 0.25 ~ <PORO>
  ZONES: [Upper, Lower]
rms:
  HORIZON: TopVolantis
```

The destination flavour of `PORO` is `0.25`, the template flavour is `<PORO>`.

Quick start: render in memory
-----------------------------
```rust,no_run
use std::path::Path;
use fmuconfig::{render_file, Flavor, Mode};

fn main() -> fmuconfig::Result<()> {
    let ipl = render_file(Path::new("global_master.yml"), Mode::Ipl, "rms", Flavor::Template)?;
    print!("{ipl}");
    Ok(())
}
```

Convert to folders
------------------
```rust,no_run
use std::path::{Path, PathBuf};
use fmuconfig::{convert_file, ExportParams, Mode};

fn main() -> fmuconfig::Result<()> {
    let params = ExportParams {
        destination: Some(PathBuf::from("rms/input/global_variables")),
        template: Some(PathBuf::from("share/templates")),
        ..ExportParams::default()
    };
    // writes global_variables.ipl and global_variables.ipl.tmpl
    convert_file(Path::new("global_master.yml"), Mode::Ipl, &params)
}
```

Error handling
--------------
All public functions return `fmuconfig::Result<T>`; match on `fmuconfig::Error` to handle
specific cases.

```rust,no_run
use std::path::Path;
use fmuconfig::{load_config, Error};

fn main() {
    match load_config(Path::new("missing.yml")) {
        Ok(cfg) => println!("loaded {cfg}"),
        Err(Error::FileNotFound { path }) => eprintln!("no such file: {}", path.display()),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`cli`] — the `fmuconfig` command-line runner.
- [`core`] — export parameters, annotated values, the `ConfigParser` object.
- [`io`] — YAML reader and IPL/YAML writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::config_parser::{ConfigParser, ConfigParserFmu};
pub use crate::core::params::ExportParams;
pub use error::{Error, Result};
pub use types::{Flavor, Mode};

pub use api::{convert_file, load_config, render_file};
