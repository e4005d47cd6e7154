pub mod ledger {
    pub mod memory;
}

pub mod repository {
    pub mod qoverflow;
}

pub mod tokener {
    pub mod jwt;
}
