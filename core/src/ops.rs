//! Static endpoint catalog for the agency portal API.
//!
//! # Design
//! Every supported call is one `const` row: logical name, relative path,
//! and the declared parameter names in the order the server expects them
//! in the form body. Adding an endpoint means adding a row; the builder,
//! transport, and decoder never change. Callers reference rows directly,
//! so an unknown operation cannot be expressed at runtime.
//!
//! Every operation posts a form-encoded body; the method is not part of
//! the table because the protocol has no other verb.

/// One row of the endpoint catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub path: &'static str,
    pub params: &'static [&'static str],
}

pub const LOGIN: Operation = Operation {
    name: "login",
    path: "/apilogin",
    params: &["username", "password"],
};

pub const DASHBOARD: Operation = Operation {
    name: "dashboard",
    path: "/apidashboard",
    params: &["brn", "ucode"],
};

pub const ALL_CONTACTS: Operation = Operation {
    name: "allContacts",
    path: "/getAllContacts",
    params: &["ucode"],
};

pub const SINGLE_CONTACT: Operation = Operation {
    name: "singleContact",
    path: "/getSingleContact",
    params: &["cust_id"],
};

pub const NEW_BUSINESS_FOLLOWUPS: Operation = Operation {
    name: "newBusinessFollowups",
    path: "/getNewBusinessFollowUps",
    params: &["ucode"],
};

// "grt" is how the live route is spelled.
pub const SINGLE_NEW_BUSINESS_FOLLOWUP: Operation = Operation {
    name: "singleNewBusinessFollowup",
    path: "/grtSingleBusinessFollowUp",
    params: &["bus_id"],
};

pub const SINGLE_RENEWAL_POLICY: Operation = Operation {
    name: "singleRenewalPolicy",
    path: "/getRenewalResult",
    params: &["ucode", "vehicle_id"],
};

pub const RENEWAL_FOLLOWUPS: Operation = Operation {
    name: "renewalFollowups",
    path: "/getRenewalFollowUpList",
    params: &["ucode"],
};

pub const RENEWAL_LIST: Operation = Operation {
    name: "renewalList",
    path: "/getRenewalList",
    params: &["ucode", "date_from", "date_to"],
};

pub const FINALIZED_BUSINESS: Operation = Operation {
    name: "finalizedBusiness",
    path: "/getFinalizedBusinessList",
    params: &["ucode"],
};

pub const SINGLE_FINALIZED_BUSINESS: Operation = Operation {
    name: "singleFinalizedBusiness",
    path: "/getSingleFinalizedBusiness",
    params: &["ucode", "quote_id"],
};

/// The full catalog, for table-driven tests and tooling.
pub const ALL: &[&Operation] = &[
    &LOGIN,
    &DASHBOARD,
    &ALL_CONTACTS,
    &SINGLE_CONTACT,
    &NEW_BUSINESS_FOLLOWUPS,
    &SINGLE_NEW_BUSINESS_FOLLOWUP,
    &SINGLE_RENEWAL_POLICY,
    &RENEWAL_FOLLOWUPS,
    &RENEWAL_LIST,
    &FINALIZED_BUSINESS,
    &SINGLE_FINALIZED_BUSINESS,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_relative_and_rooted() {
        for op in ALL {
            assert!(op.path.starts_with('/'), "{}: path must start with /", op.name);
            assert!(!op.path.ends_with('/'), "{}: path must not end with /", op.name);
        }
    }

    #[test]
    fn every_operation_declares_parameters() {
        for op in ALL {
            assert!(!op.params.is_empty(), "{}: no declared parameters", op.name);
        }
    }

    #[test]
    fn names_and_paths_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.name, b.name);
                assert_ne!(a.path, b.path);
            }
        }
    }
}
