//! `warden destroy` — destroy a container.

use warden_api::ContainerApi;
use warden_common::config::CliConfig;
use warden_common::error::{Result, WardenError};

use crate::output::OutputSink;
use crate::registry::CommandRegistry;

/// Registers the `destroy` command.
pub fn register(registry: &mut CommandRegistry) {
    registry.register(
        &["destroy"],
        "Destroy a container",
        "Destroy the named container. With force enabled, all processes in \
         the container are killed first.",
        destroy_container,
    );
}

/// Handler for `destroy <container-name>`.
pub fn destroy_container(
    args: &[String],
    api: &dyn ContainerApi,
    config: &CliConfig,
    _sink: &mut OutputSink<'_>,
) -> Result<()> {
    let [name] = args else {
        return Err(WardenError::usage(
            "destroy requires exactly one container name",
        ));
    };
    if config.force {
        api.get(name)?.kill_all()?;
    }
    api.destroy(name)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::output::OutputStyle;
    use crate::testing::{ApiScript, ContainerScript, FakeApi};

    fn run_handler(args: &[&str], script: &Rc<ApiScript>, config: &CliConfig) -> Result<()> {
        let args: Vec<String> = args.iter().map(ToString::to_string).collect();
        let mut buf = Vec::new();
        let mut sink = OutputSink::new(OutputStyle::Pairs, &mut buf);
        destroy_container(&args, &FakeApi(script.clone()), config, &mut sink)
    }

    #[test]
    fn destroy_without_force_skips_the_kill() {
        let script = Rc::new(ApiScript::default());
        *script.destroy_result.borrow_mut() = Some(Ok(()));
        run_handler(&["/test"], &script, &CliConfig::default()).expect("should succeed");
        assert_eq!(script.get_calls.get(), 0);
        assert_eq!(script.last_destroy_name.borrow().as_deref(), Some("/test"));
    }

    #[test]
    fn force_kills_all_processes_first() {
        let container = ContainerScript::named("/test");
        *container.kill_all_result.borrow_mut() = Some(Ok(()));
        let script = Rc::new(ApiScript::default());
        *script.get_result.borrow_mut() = Some(Ok(container.clone()));
        *script.destroy_result.borrow_mut() = Some(Ok(()));
        let config = CliConfig {
            force: true,
            ..CliConfig::default()
        };
        run_handler(&["/test"], &script, &config).expect("should succeed");
        assert_eq!(container.kill_all_calls.get(), 1);
        assert_eq!(script.destroy_calls.get(), 1);
    }

    #[test]
    fn failed_kill_short_circuits_the_destroy() {
        let container = ContainerScript::named("/test");
        *container.kill_all_result.borrow_mut() =
            Some(Err(WardenError::PermissionDenied {
                message: "kill".to_string(),
            }));
        let script = Rc::new(ApiScript::default());
        *script.get_result.borrow_mut() = Some(Ok(container));
        let config = CliConfig {
            force: true,
            ..CliConfig::default()
        };
        let err = run_handler(&["/test"], &script, &config).expect_err("should fail");
        assert_eq!(err.exit_code(), 7);
        assert_eq!(script.destroy_calls.get(), 0);
    }

    #[test]
    fn wrong_arity_is_a_usage_error() {
        let script = Rc::new(ApiScript::default());
        assert_eq!(
            run_handler(&[], &script, &CliConfig::default())
                .expect_err("should fail")
                .exit_code(),
            64
        );
        assert_eq!(
            run_handler(&["/a", "/b"], &script, &CliConfig::default())
                .expect_err("should fail")
                .exit_code(),
            64
        );
    }
}
