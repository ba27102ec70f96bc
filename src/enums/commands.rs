use clap::Subcommand;
use crate::structs::input_args::InputArgs;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send the error for analysis and publish the results
    Analyze {
        #[clap(flatten)]
        inputs: InputArgs,
    },
    /// Resolve inputs and run context without calling the API
    Validate {
        #[clap(flatten)]
        inputs: InputArgs,
    },
}
