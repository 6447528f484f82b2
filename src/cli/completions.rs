use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    ctxsync completions bash > ~/.bash_completion.d/ctxsync\n\n\
                  Generate zsh completions:\n    ctxsync completions zsh > ~/.zfunc/_ctxsync\n\n\
                  Generate fish completions:\n    ctxsync completions fish > ~/.config/fish/completions/ctxsync.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
