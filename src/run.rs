mod cli;
mod menu;

pub(crate) use cli::as_cli;
pub(crate) use menu::as_menu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Menu,
    Cli,
}

impl Mode {
    /// A command word selects the one-shot CLI. No arguments, including an
    /// empty argv with no program name, opens the menu.
    pub(crate) fn from_args(args: &[String]) -> Self {
        if args.len() > 1 {
            Self::Cli
        } else {
            Self::Menu
        }
    }
}
