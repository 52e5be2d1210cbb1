//! SQL Server script template.

/// Everything needed to wrap a cleaned values block into a runnable script.
#[derive(Debug, Clone)]
pub struct ScriptTemplate<'a> {
    pub table: &'a str,
    /// Empty slice emits `INSERT INTO <table> VALUES`
    pub columns: &'a [String],
    pub primary_key: &'a str,
    pub preview_rows: usize,
}

impl ScriptTemplate<'_> {
    /// Column clause including parentheses, or an empty string.
    pub fn column_list(&self) -> String {
        if self.columns.is_empty() {
            String::new()
        } else {
            format!("({})", self.columns.join(", "))
        }
    }

    /// Render the full script around `values`.
    ///
    /// The insert runs inside a transaction in a `TRY`/`CATCH` block with
    /// `IDENTITY_INSERT` enabled for its duration, followed by a row count
    /// and a preview of the newest rows.
    pub fn render(&self, values: &str) -> String {
        let table = self.table;
        let values = values.trim_end().trim_end_matches(',');
        let insert_target = match self.column_list() {
            cols if cols.is_empty() => table.to_string(),
            cols => format!("{} {}", table, cols),
        };

        format!(
            "\
-- SQL Server INSERT Script for {table}
-- Generated by mssql-cleaner
-- Original MySQL data cleaned for SQL Server compatibility

-- Enable IDENTITY_INSERT
SET IDENTITY_INSERT {table} ON;
SET NOCOUNT ON;

-- Begin Transaction for safety
BEGIN TRANSACTION;

BEGIN TRY
    -- Insert statements
    INSERT INTO {insert_target} VALUES
    {values};

    -- Commit if successful
    COMMIT TRANSACTION;
    PRINT 'SUCCESS: Data inserted successfully into {table}';

END TRY
BEGIN CATCH
    -- Rollback on error
    IF @@TRANCOUNT > 0
        ROLLBACK TRANSACTION;
    PRINT 'ERROR: ' + ERROR_MESSAGE();
    PRINT 'Error occurred during insert into {table}';
END CATCH

-- Disable IDENTITY_INSERT
SET IDENTITY_INSERT {table} OFF;
SET NOCOUNT OFF;

-- Verify insertion
SELECT COUNT(*) AS 'Total Records in {table}' FROM {table};
SELECT TOP {top} * FROM {table} ORDER BY {pk} DESC;
",
            top = self.preview_rows,
            pk = self.primary_key,
        )
    }
}
