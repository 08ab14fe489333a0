use gdvariant_codec::VersionProfile;

use crate::cmd::ProfilesArgs;
use crate::exit::{registry_error, CliResult, SUCCESS};
use crate::output::{print_profiles, OutputFormat};

pub fn run(_args: ProfilesArgs, format: OutputFormat) -> CliResult<i32> {
    let registries = VersionProfile::ALL
        .into_iter()
        .map(VersionProfile::build)
        .collect::<Result<Vec<_>, _>>()
        .map_err(registry_error)?;

    print_profiles(&registries, format);
    Ok(SUCCESS)
}
