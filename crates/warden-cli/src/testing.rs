//! Strict scripted fakes for the backend boundary.
//!
//! Each backend call consumes its scripted result exactly once and panics if
//! nothing was scripted, so a test fails loudly when a handler makes a call
//! it was not supposed to make. Call counters and captured arguments let
//! tests assert short-circuiting.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use warden_api::{
    ApiFactory, Container, ContainerApi, ContainerSpec, ContainerStats, ListPolicy,
};
use warden_common::error::{Result, WardenError};

/// Scripted behavior and call record for one fake container.
#[derive(Default)]
pub struct ContainerScript {
    pub name: String,
    pub spec_result: RefCell<Option<Result<ContainerSpec>>>,
    pub stats_result: RefCell<Option<Result<ContainerStats>>>,
    pub subcontainers_result: RefCell<Option<Result<Vec<String>>>>,
    pub processes_result: RefCell<Option<Result<Vec<u32>>>>,
    pub threads_result: RefCell<Option<Result<Vec<u32>>>>,
    pub run_result: RefCell<Option<Result<u32>>>,
    pub enter_result: RefCell<Option<Result<()>>>,
    pub kill_all_result: RefCell<Option<Result<()>>>,
    pub spec_calls: Cell<usize>,
    pub kill_all_calls: Cell<usize>,
    pub last_list_policy: Cell<Option<ListPolicy>>,
    pub last_run: RefCell<Option<(Vec<String>, bool)>>,
    pub last_enter: RefCell<Option<Vec<u32>>>,
}

impl ContainerScript {
    pub fn named(name: &str) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            ..Self::default()
        })
    }
}

fn take<T>(slot: &RefCell<Option<Result<T>>>, call: &str) -> Result<T> {
    slot.borrow_mut()
        .take()
        .unwrap_or_else(|| panic!("unexpected {call} call"))
}

/// Fake [`Container`] driven by a shared [`ContainerScript`].
pub struct FakeContainer(pub Rc<ContainerScript>);

impl Container for FakeContainer {
    fn name(&self) -> &str {
        &self.0.name
    }

    fn spec(&self) -> Result<ContainerSpec> {
        self.0.spec_calls.set(self.0.spec_calls.get() + 1);
        take(&self.0.spec_result, "spec()")
    }

    fn stats(&self) -> Result<ContainerStats> {
        take(&self.0.stats_result, "stats()")
    }

    fn list_subcontainers(&self, policy: ListPolicy) -> Result<Vec<String>> {
        self.0.last_list_policy.set(Some(policy));
        take(&self.0.subcontainers_result, "list_subcontainers()")
    }

    fn list_processes(&self, policy: ListPolicy) -> Result<Vec<u32>> {
        self.0.last_list_policy.set(Some(policy));
        take(&self.0.processes_result, "list_processes()")
    }

    fn list_threads(&self, policy: ListPolicy) -> Result<Vec<u32>> {
        self.0.last_list_policy.set(Some(policy));
        take(&self.0.threads_result, "list_threads()")
    }

    fn run(&self, command: &[String], no_wait: bool) -> Result<u32> {
        *self.0.last_run.borrow_mut() = Some((command.to_vec(), no_wait));
        take(&self.0.run_result, "run()")
    }

    fn enter(&self, pids: &[u32]) -> Result<()> {
        *self.0.last_enter.borrow_mut() = Some(pids.to_vec());
        take(&self.0.enter_result, "enter()")
    }

    fn kill_all(&self) -> Result<()> {
        self.0.kill_all_calls.set(self.0.kill_all_calls.get() + 1);
        take(&self.0.kill_all_result, "kill_all()")
    }
}

/// Scripted behavior and call record for the fake API.
#[derive(Default)]
pub struct ApiScript {
    pub detect_result: RefCell<Option<Result<String>>>,
    pub get_result: RefCell<Option<Result<Rc<ContainerScript>>>>,
    pub create_result: RefCell<Option<Result<Rc<ContainerScript>>>>,
    pub destroy_result: RefCell<Option<Result<()>>>,
    pub detect_calls: Cell<usize>,
    pub get_calls: Cell<usize>,
    pub create_calls: Cell<usize>,
    pub destroy_calls: Cell<usize>,
    pub last_detect_pid: Cell<Option<u32>>,
    pub last_get_name: RefCell<Option<String>>,
    pub last_create: RefCell<Option<(String, ContainerSpec)>>,
    pub last_destroy_name: RefCell<Option<String>>,
}

/// Fake [`ContainerApi`] driven by a shared [`ApiScript`].
pub struct FakeApi(pub Rc<ApiScript>);

impl ContainerApi for FakeApi {
    fn detect(&self, pid: u32) -> Result<String> {
        self.0.detect_calls.set(self.0.detect_calls.get() + 1);
        self.0.last_detect_pid.set(Some(pid));
        take(&self.0.detect_result, "detect()")
    }

    fn get(&self, name: &str) -> Result<Box<dyn Container>> {
        self.0.get_calls.set(self.0.get_calls.get() + 1);
        *self.0.last_get_name.borrow_mut() = Some(name.to_string());
        take(&self.0.get_result, "get()").map(|script| Box::new(FakeContainer(script)) as _)
    }

    fn create(&self, name: &str, spec: &ContainerSpec) -> Result<Box<dyn Container>> {
        self.0.create_calls.set(self.0.create_calls.get() + 1);
        *self.0.last_create.borrow_mut() = Some((name.to_string(), spec.clone()));
        take(&self.0.create_result, "create()").map(|script| Box::new(FakeContainer(script)) as _)
    }

    fn destroy(&self, name: &str) -> Result<()> {
        self.0.destroy_calls.set(self.0.destroy_calls.get() + 1);
        *self.0.last_destroy_name.borrow_mut() = Some(name.to_string());
        take(&self.0.destroy_result, "destroy()")
    }
}

/// Fake [`ApiFactory`] handing out [`FakeApi`] instances over one script.
pub struct FakeFactory {
    pub script: Rc<ApiScript>,
    pub create_api_calls: Cell<usize>,
    pub fail_with: RefCell<Option<WardenError>>,
}

impl FakeFactory {
    pub fn new(script: Rc<ApiScript>) -> Self {
        Self {
            script,
            create_api_calls: Cell::new(0),
            fail_with: RefCell::new(None),
        }
    }
}

impl ApiFactory for FakeFactory {
    fn create_api(&self) -> Result<Box<dyn ContainerApi>> {
        self.create_api_calls.set(self.create_api_calls.get() + 1);
        if let Some(err) = self.fail_with.borrow_mut().take() {
            return Err(err);
        }
        Ok(Box::new(FakeApi(self.script.clone())))
    }
}
