use thiserror::Error;

pub const USAGE: &str = "\
usage: admin-file-storage <command>

commands:
  home                              show the signed-in administrator
  users                             list all users
  show <id> [file-index]            show a user, their files and optionally one file
  delete <id> [--yes]               delete a user after confirmation
  update <id> <field=value>...      edit surname, name, username, email or phone
  search-user <username> [--select <n>]
  search-file <name>";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("missing command")]
    MissingCommand,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid {name}: '{value}'")]
    InvalidArgument { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Home,
    Users,
    Show { user_id: i64, file: Option<usize> },
    Delete { user_id: i64, assume_yes: bool },
    Update { user_id: i64, assignments: Vec<(String, String)> },
    SearchUser { query: String, select: Option<usize> },
    SearchFile { query: String },
}

fn user_id(arg: Option<&String>) -> Result<i64, CommandError> {
    let raw = arg.ok_or(CommandError::MissingArgument("user id"))?;
    raw.parse().map_err(|_| CommandError::InvalidArgument {
        name: "user id",
        value: raw.clone(),
    })
}

fn index(raw: &str) -> Result<usize, CommandError> {
    raw.parse().map_err(|_| CommandError::InvalidArgument {
        name: "index",
        value: raw.to_string(),
    })
}

impl Command {
    /// Parses the arguments after the program name.
    pub fn parse(args: &[String]) -> Result<Self, CommandError> {
        let (name, rest) = args.split_first().ok_or(CommandError::MissingCommand)?;

        match name.as_str() {
            "home" => Ok(Command::Home),
            "users" => Ok(Command::Users),
            "show" => Ok(Command::Show {
                user_id: user_id(rest.first())?,
                file: rest.get(1).map(|raw| index(raw)).transpose()?,
            }),
            "delete" => Ok(Command::Delete {
                user_id: user_id(rest.first())?,
                assume_yes: rest.iter().skip(1).any(|a| a == "--yes" || a == "-y"),
            }),
            "update" => {
                let user_id = user_id(rest.first())?;
                let assignments = rest
                    .iter()
                    .skip(1)
                    .map(|pair| {
                        pair.split_once('=')
                            .map(|(k, v)| (k.to_string(), v.to_string()))
                            .ok_or_else(|| CommandError::InvalidArgument {
                                name: "assignment",
                                value: pair.clone(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Command::Update {
                    user_id,
                    assignments,
                })
            }
            "search-user" => {
                let mut query = String::new();
                let mut select = None;
                let mut iter = rest.iter();
                while let Some(arg) = iter.next() {
                    if arg == "--select" {
                        let raw = iter.next().ok_or(CommandError::MissingArgument("--select"))?;
                        select = Some(index(raw)?);
                    } else {
                        query = arg.clone();
                    }
                }
                Ok(Command::SearchUser { query, select })
            }
            "search-file" => Ok(Command::SearchFile {
                query: rest.first().cloned().unwrap_or_default(),
            }),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
