//! Mocks handed to the code under test in place of its collaborators.

use faux_fn::{Failure, MockFn};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    data: T,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpError(u16);

type Get = MockFn<(String,), Response<Vec<User>>, HttpError>;

/// Code under test: lists users through whatever `get` it was given.
pub struct Users<G> {
    get: G,
}

impl<G> Users<G>
where
    G: FnMut(String) -> Result<Response<Vec<User>>, Failure<HttpError>>,
{
    pub fn all(&mut self) -> Result<Vec<User>, Failure<HttpError>> {
        let get = &mut self.get;
        get("users.json".to_string()).map(|response| response.data)
    }
}

fn bob() -> Vec<User> {
    vec![User {
        name: "Bob".to_string(),
    }]
}

#[test]
fn should_fetch_users() {
    let mut get = Get::returning(Response { data: vec![] }).named("axios.get");
    get.set_return_value(Response { data: bob() });

    {
        let mut users = Users {
            get: |url: String| get.invoke((url,)),
        };
        assert_eq!(users.all(), Ok(bob()));
    }

    assert_eq!(get.call_args(0), Ok(&("users.json".to_string(),)));
}

#[test]
fn fetch_failure_reaches_caller() {
    let mut get = Get::returning(Response { data: vec![] });
    get.queue_failure_once(HttpError(503));

    let mut users = Users {
        get: |url: String| get.invoke((url,)),
    };
    assert_eq!(users.all(), Err(Failure::Raised(HttpError(503))));
    assert_eq!(users.all(), Ok(vec![]));
}
