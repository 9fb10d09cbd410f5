use crate::commands::{
    run_assess, run_gateway, run_questions, AssessArgs, GatewayArgs, QuestionsArgs,
};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use investor_visa::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "NZ Business Investor Visa Assessment",
    about = "Screen and score Business Investor visa applicants from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run the seven-point gateway screen over an answer file
    Gateway(GatewayArgs),
    /// Score a detailed assessment and optionally send the report
    Assess(AssessArgs),
    /// List the assessment questions
    Questions(QuestionsArgs),
    /// Walk a built-in applicant through both stages and preview the report
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Gateway(args) => run_gateway(args),
        Command::Assess(args) => run_assess(args),
        Command::Questions(args) => run_questions(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use investor_visa::assessment::QuestionStage;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["investor-visa-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn assess_accepts_email_and_json_flags() {
        let cli = Cli::try_parse_from([
            "investor-visa-api",
            "assess",
            "--answers",
            "answers.json",
            "--email",
            "applicant@example.com",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.answers.to_str(), Some("answers.json"));
                assert_eq!(args.email.as_deref(), Some("applicant@example.com"));
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn questions_stage_is_parsed() {
        let cli = Cli::try_parse_from(["investor-visa-api", "questions", "--stage", "detailed"])
            .expect("parses");
        match cli.command {
            Some(Command::Questions(args)) => {
                assert_eq!(args.stage, Some(QuestionStage::Detailed))
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(
            Cli::try_parse_from(["investor-visa-api", "questions", "--stage", "final"]).is_err()
        );
    }

    #[test]
    fn gateway_requires_an_answer_file() {
        assert!(Cli::try_parse_from(["investor-visa-api", "gateway"]).is_err());
    }
}
