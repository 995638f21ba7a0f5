pub mod check;
pub mod config;
pub mod context;
pub mod init;
pub mod list;
pub mod update;
pub mod validate;
pub mod version;
pub mod view;

pub use check::{run_check, run_check_impl};
pub use config::{run_config, run_config_impl};
pub use context::{CommandContext, exit_code_for, load_config, resolve_spec_path};
pub use init::{run_init, run_init_impl};
pub use list::{run_list, run_list_impl};
pub use update::{run_update, run_update_impl};
pub use validate::{run_validate, run_validate_impl};
pub use version::{VERSION, run_version, run_version_impl};
pub use view::{run_view, run_view_impl};
