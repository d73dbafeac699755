// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scripted transport for unit tests.

use std::collections::VecDeque;

use parking_lot::Mutex;
use serde_json::{Value, json};

use crate::error::TransportError;
use crate::protocol::{Request, Transport};

/// Replays queued responses in order and records every request it receives.
///
/// When the queue is empty it answers with an empty acknowledgement list.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
    requests: Mutex<Vec<Request>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub(crate) fn respond(self, body: Value) -> Self {
        self.responses.lock().push_back(Ok(body));
        self
    }

    /// Queues a transport failure.
    pub(crate) fn fail(self, error: TransportError) -> Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    /// Returns a copy of every request received so far.
    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.lock().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn call(&self, request: Request) -> Result<Value, TransportError> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(json!([])))
    }
}
