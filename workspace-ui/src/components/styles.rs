pub const WORKBENCH_STYLES: &str = r#"
/* Layout */
.workbench {
    display: flex;
    flex-direction: column;
    height: 100vh;
    background: var(--desktop-bg, #0f172a);
    color: var(--text-primary, #f8fafc);
    font-family: system-ui, -apple-system, sans-serif;
    overflow: hidden;
}

.workbench-body {
    flex: 1;
    min-height: 0;
    display: grid;
    grid-template-columns: 220px minmax(0, 1fr) minmax(0, 1fr);
}

/* Toolbar buttons */
.wb-button {
    padding: 0.375rem 0.75rem;
    background: var(--window-bg, #1f2937);
    color: var(--text-secondary, #9ca3af);
    border: 1px solid var(--border-color, #374151);
    border-radius: var(--radius-md, 8px);
    font-size: 0.8125rem;
    cursor: pointer;
}

.wb-button:hover:not(:disabled) {
    color: var(--text-primary, #f8fafc);
    border-color: var(--accent-bg, #3b82f6);
}

.wb-button:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

.wb-button.primary {
    background: var(--accent-bg, #3b82f6);
    color: white;
    border: none;
}

/* File list */
.file-list {
    display: flex;
    flex-direction: column;
    border-right: 1px solid var(--border-color, #374151);
    overflow-y: auto;
}

.file-item {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 0.5rem;
    padding: 0.4rem 0.75rem;
    font-size: 0.8125rem;
    cursor: pointer;
    color: var(--text-secondary, #9ca3af);
    border-left: 2px solid transparent;
}

.file-item:hover {
    background: var(--hover-bg, rgba(255, 255, 255, 0.04));
}

.file-item.active {
    color: var(--text-primary, #f8fafc);
    background: var(--selected-bg, rgba(59, 130, 246, 0.15));
    border-left-color: var(--accent-bg, #3b82f6);
}

.mode-badge {
    font-size: 0.625rem;
    padding: 0.05rem 0.35rem;
    border-radius: var(--radius-sm, 4px);
    background: var(--window-bg, #1f2937);
    color: var(--text-muted, #6b7280);
}

/* Editor */
.editor-textarea {
    flex: 1;
    width: 100%;
    padding: 1rem;
    background: var(--input-bg, #111827);
    color: var(--text-primary, #f8fafc);
    border: none;
    resize: none;
    outline: none;
    font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace;
    font-size: 0.8125rem;
    line-height: 1.6;
    tab-size: 4;
}

.editor-textarea:disabled {
    color: var(--text-muted, #6b7280);
}

/* Preview */
.preview-frame {
    flex: 1;
    width: 100%;
    border: none;
    background: white;
}

/* Dialog */
.dialog-backdrop {
    position: fixed;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.55);
    z-index: 40;
}

.dialog {
    width: min(480px, 90vw);
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    padding: 1.25rem;
    background: var(--window-bg, #1f2937);
    border: 1px solid var(--border-color, #374151);
    border-radius: var(--radius-lg, 12px);
    box-shadow: var(--shadow-lg, 0 10px 40px rgba(0, 0, 0, 0.5));
}

.dialog input,
.dialog textarea {
    padding: 0.5rem 0.75rem;
    background: var(--input-bg, #111827);
    color: var(--text-primary, #f8fafc);
    border: 1px solid var(--border-color, #374151);
    border-radius: var(--radius-md, 8px);
    font-size: 0.875rem;
    outline: none;
}
"#;
