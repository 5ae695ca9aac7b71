/// Test initialization that sets the transaction policy to rollback on success.
///
/// This constructor runs once per integration test binary that includes this
/// file. Binaries that omit it keep the default commit behavior.
#[ctor::ctor]
fn init_test_txn_policy() {
    scoreboard::db::txn_policy::set_txn_policy(
        scoreboard::db::txn_policy::TxnPolicy::RollbackOnOk,
    );
}
