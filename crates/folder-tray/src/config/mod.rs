mod behaviour_config;
#[allow(clippy::module_inception)]
mod config;
mod launch_config;

pub(crate) use {behaviour_config::BehaviourConfig, config::Config, launch_config::LaunchConfig};

pub(crate) const DEFAULT_NOTIFY_ON_LAUNCH_FAILURE: bool = true;

pub(crate) fn default_notify_on_launch_failure() -> bool {
    DEFAULT_NOTIFY_ON_LAUNCH_FAILURE
}
